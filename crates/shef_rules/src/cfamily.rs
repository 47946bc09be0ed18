//! C and C++ rules: the extension set and a table of risky library calls.
//!
//! Levels run from 0 (informational) to 5 (high risk) and follow the
//! conventions of the flawfinder rule database, so the built-in scanner and
//! the external tool agree on severity for the calls they share.

/// File extensions handled by the C/C++ scanner, lowercase without the dot.
pub static C_EXTENSIONS: &[&str] = &[
    "c", "h", "ec", "ecp", "pgc", "cpp", "cxx", "c++", "cc", "pcc", "hpp", "hxx", "hh",
];

/// Returns `true` if `ext` (without the dot, any case) is a C/C++ extension.
#[must_use]
pub fn is_c_extension(ext: &str) -> bool {
    C_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext))
}

/// Argument inspection applied to a call before its level is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgCheck {
    /// Report the rule level unchanged.
    None,
    /// Drop to level 1 when the argument at this index is a string literal.
    ConstantSource(usize),
    /// Drop to level 0 when the format argument at this index is a string literal.
    ConstantFormat(usize),
    /// Drop to level 1 when the format at this index is a literal without `%s`.
    BoundedFormat(usize),
    /// Drop to level 1 when the format at this index is a literal without `%s` or `%[`.
    ScanFormat(usize),
    /// Matches a type name followed by a fixed-size array declarator.
    StaticArray,
}

/// A risky call (or declaration) recognised by the built-in scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallRule {
    /// Identifiers this rule fires on.
    pub names: &'static [&'static str],
    /// Default risk level, 0 to 5.
    pub level: u8,
    /// Short category label (e.g. `"buffer"`, `"shell"`).
    pub category: &'static str,
    /// CWE reference, e.g. `"CWE-120"`.
    pub cwe: &'static str,
    /// Human-readable warning.
    pub warning: &'static str,
    /// Argument-aware level adjustment.
    pub check: ArgCheck,
}

impl CallRule {
    const fn new(
        names: &'static [&'static str],
        level: u8,
        category: &'static str,
        cwe: &'static str,
        warning: &'static str,
        check: ArgCheck,
    ) -> Self {
        Self {
            names,
            level,
            category,
            cwe,
            warning,
            check,
        }
    }
}

/// The built-in risky-call table.
pub static CALL_RULES: &[CallRule] = &[
    CallRule::new(
        &[
            "strcpy",
            "strcpyA",
            "strcpyW",
            "StrCpy",
            "StrCpyA",
            "lstrcpy",
            "lstrcpyA",
            "lstrcpyW",
            "_tcscpy",
            "_mbscpy",
            "wcscpy",
            "stpcpy",
        ],
        4,
        "buffer",
        "CWE-120",
        "Does not check for buffer overflows when copying to destination",
        ArgCheck::ConstantSource(1),
    ),
    CallRule::new(
        &["strcat", "lstrcat", "lstrcatA", "lstrcatW", "StrCat", "_tcscat", "_mbscat", "wcscat"],
        4,
        "buffer",
        "CWE-120",
        "Does not check for buffer overflows when concatenating to destination",
        ArgCheck::ConstantSource(1),
    ),
    CallRule::new(
        &["gets", "_getts"],
        5,
        "buffer",
        "CWE-120, CWE-20",
        "Does not check for buffer overflows; use fgets() instead",
        ArgCheck::None,
    ),
    CallRule::new(
        &["sprintf", "vsprintf", "swprintf", "vswprintf", "_stprintf", "_vstprintf"],
        4,
        "buffer",
        "CWE-120",
        "Does not check for buffer overflows; use snprintf or vsnprintf",
        ArgCheck::BoundedFormat(1),
    ),
    CallRule::new(
        &["printf", "vprintf", "vwprintf", "_tprintf"],
        4,
        "format",
        "CWE-134",
        "If format strings can be influenced by an attacker, they can be exploited",
        ArgCheck::ConstantFormat(0),
    ),
    CallRule::new(
        &["fprintf", "vfprintf", "fwprintf", "vfwprintf", "_ftprintf", "syslog"],
        4,
        "format",
        "CWE-134",
        "If format strings can be influenced by an attacker, they can be exploited",
        ArgCheck::ConstantFormat(1),
    ),
    CallRule::new(
        &["snprintf", "vsnprintf", "_snprintf", "_sntprintf", "_vsntprintf"],
        4,
        "format",
        "CWE-134",
        "If format strings can be influenced by an attacker, they can be exploited",
        ArgCheck::ConstantFormat(2),
    ),
    CallRule::new(
        &["scanf", "vscanf", "wscanf", "_tscanf"],
        4,
        "buffer",
        "CWE-120, CWE-20",
        "The scanf() family's %s operation, without a limit specification, permits buffer overflows",
        ArgCheck::ScanFormat(0),
    ),
    CallRule::new(
        &["sscanf", "fscanf", "vsscanf", "vfscanf", "swscanf", "fwscanf", "_stscanf", "_ftscanf"],
        4,
        "buffer",
        "CWE-120, CWE-20",
        "The scanf() family's %s operation, without a limit specification, permits buffer overflows",
        ArgCheck::ScanFormat(1),
    ),
    CallRule::new(
        &["strncpy", "lstrcpyn", "wcsncpy", "_tcsncpy", "_mbsncpy"],
        1,
        "buffer",
        "CWE-120",
        "Easily used incorrectly; doesn't always \\0-terminate or check for invalid pointers",
        ArgCheck::None,
    ),
    CallRule::new(
        &["strncat", "lstrcatn", "wcsncat", "_tcsncat", "_mbsncat"],
        1,
        "buffer",
        "CWE-120",
        "Easily used incorrectly (e.g., incorrectly computing the correct maximum size to add)",
        ArgCheck::None,
    ),
    CallRule::new(
        &["strlen", "wcslen", "_tcslen", "_mbslen"],
        1,
        "buffer",
        "CWE-126",
        "Does not handle strings that are not \\0-terminated; if given one it may perform an over-read",
        ArgCheck::None,
    ),
    CallRule::new(
        &["memcpy", "CopyMemory", "bcopy", "wmemcpy"],
        2,
        "buffer",
        "CWE-120",
        "Does not check for buffer overflows when copying to destination",
        ArgCheck::None,
    ),
    CallRule::new(
        &["getenv", "curl_getenv"],
        3,
        "buffer",
        "CWE-807, CWE-20",
        "Environment variables are untrustable input if they can be set by an attacker",
        ArgCheck::None,
    ),
    CallRule::new(
        &["realpath", "getwd"],
        3,
        "buffer",
        "CWE-120, CWE-785",
        "This function does not protect against buffer overflows, and some implementations can overflow internally",
        ArgCheck::None,
    ),
    CallRule::new(
        &["getopt", "getopt_long"],
        3,
        "buffer",
        "CWE-120, CWE-20",
        "Some older implementations do not protect against internal buffer overflows",
        ArgCheck::None,
    ),
    CallRule::new(
        &["getpass"],
        3,
        "buffer",
        "CWE-120, CWE-20",
        "Some implementations may overflow buffers",
        ArgCheck::None,
    ),
    CallRule::new(
        &["system", "popen", "_wsystem", "_popen", "_wpopen"],
        4,
        "shell",
        "CWE-78",
        "This causes a new program to execute and is difficult to use safely",
        ArgCheck::None,
    ),
    CallRule::new(
        &["execl", "execlp", "execle", "execv", "execvp", "execve", "ShellExecute", "WinExec"],
        4,
        "shell",
        "CWE-78",
        "This causes a new program to execute and is difficult to use safely",
        ArgCheck::None,
    ),
    CallRule::new(
        &["CreateProcess", "CreateProcessAsUser", "CreateProcessWithLogon"],
        3,
        "shell",
        "CWE-78",
        "This causes a new process to execute and is difficult to use safely",
        ArgCheck::None,
    ),
    CallRule::new(
        &["access", "_access", "_waccess"],
        4,
        "race",
        "CWE-362, CWE-367",
        "This usually indicates a security flaw: an attacker can change the file between the check and its use",
        ArgCheck::None,
    ),
    CallRule::new(
        &["chown", "chmod", "chgrp"],
        5,
        "race",
        "CWE-362",
        "This accepts filename arguments; if an attacker can move those files, a race condition results",
        ArgCheck::None,
    ),
    CallRule::new(
        &["readlink"],
        5,
        "race",
        "CWE-362, CWE-20",
        "This accepts filename arguments; if an attacker can move those files or change the link content, a race condition results",
        ArgCheck::None,
    ),
    CallRule::new(
        &["mktemp"],
        4,
        "tmpfile",
        "CWE-377",
        "Temporary file race condition",
        ArgCheck::None,
    ),
    CallRule::new(
        &["tmpnam", "tempnam"],
        3,
        "tmpfile",
        "CWE-377",
        "Temporary file race condition",
        ArgCheck::None,
    ),
    CallRule::new(
        &["tmpfile"],
        2,
        "tmpfile",
        "CWE-377",
        "Function tmpfile() has a security flaw on some systems",
        ArgCheck::None,
    ),
    CallRule::new(
        &["rand", "random", "drand48", "erand48", "lrand48", "mrand48", "srand", "srandom"],
        3,
        "random",
        "CWE-327",
        "This function is not sufficiently random for security-related functions such as key and nonce creation",
        ArgCheck::None,
    ),
    CallRule::new(
        &["crypt", "crypt_r", "EVP_des_ecb", "EVP_des_cbc", "EVP_rc4", "EVP_rc2_ecb"],
        4,
        "crypto",
        "CWE-327",
        "The function uses a poor cryptographic algorithm",
        ArgCheck::None,
    ),
    CallRule::new(
        &["chroot"],
        3,
        "misc",
        "CWE-250, CWE-22",
        "chroot can be very helpful, but is hard to use correctly",
        ArgCheck::None,
    ),
    CallRule::new(
        &["LoadLibrary", "LoadLibraryEx"],
        3,
        "misc",
        "CWE-829, CWE-20",
        "Ensure that the full path to the library is specified, or current directory may be used",
        ArgCheck::None,
    ),
    CallRule::new(
        &["atoi", "atol", "_wtoi", "_wtoi64"],
        2,
        "integer",
        "CWE-190",
        "Unless checked, the resulting number can exceed the expected range",
        ArgCheck::None,
    ),
    CallRule::new(
        &["open", "fopen"],
        2,
        "misc",
        "CWE-362",
        "Check when opening files: can an attacker redirect it, create a race condition, or control its ancestors",
        ArgCheck::None,
    ),
    CallRule::new(
        &["read"],
        1,
        "buffer",
        "CWE-120, CWE-20",
        "Check buffer boundaries if used in a loop including recursive loops",
        ArgCheck::None,
    ),
    CallRule::new(
        &["umask"],
        1,
        "access",
        "CWE-732",
        "Ensure that umask is given most restrictive possible setting",
        ArgCheck::None,
    ),
    CallRule::new(
        &["char", "TCHAR", "wchar_t"],
        2,
        "buffer",
        "CWE-119, CWE-120",
        "Statically-sized arrays can be improperly restricted, leading to potential overflows or other issues",
        ArgCheck::StaticArray,
    ),
];

/// Returns the rule that fires on `name`, if any.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static CallRule> {
    CALL_RULES.iter().find(|rule| rule.names.contains(&name))
}
