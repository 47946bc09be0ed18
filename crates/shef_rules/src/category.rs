//! Vulnerability categories matched against commit messages.

/// A named vulnerability category and the commit-message pattern that
/// triggers it.
///
/// Patterns are written without inline flags; the catalog compiles them
/// case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDef {
    /// Unique display name (e.g. `"Buffer Overflow"`).
    pub name: &'static str,
    /// One-line description of the class of issue.
    pub description: &'static str,
    /// Regular expression searched anywhere in the normalised message.
    pub regex: &'static str,
}

/// Trigger language shared by "Broken Access Control" and
/// "Security Misconfiguration". Both labels must keep firing together.
const ACCESS_AND_CONFIGURATION: &str = r"\b(?:access[\s\-_]+control\w*|permissions?|privileges?|unauthori[sz]ed|misconfigur\w*|insecure[\s\-_]+defaults?|default[\s\-_]+(?:password|credential)s?|hardcoded[\s\-_]+(?:password|credential|key)s?)\b";

/// The built-in catalog, in classification order.
pub static BUILTIN_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "Injection",
        description: "Untrusted data sent to an interpreter as part of a command or query.",
        regex: r"\b(?:(?:sql|nosql|os|command|code|ldap|xpath|xml|html|crlf|header|shell|template|script|object)[\s\-_]*)?inject(?:ion|ions|ed|ing|s)?\b",
    },
    CategoryDef {
        name: "Broken Authentication",
        description: "Flaws in authentication or session management.",
        regex: r"\b(?:broken|bypass(?:ed|es|ing)?|weak|missing|improper)[\s\-_]+auth(?:entication|orization)?\b|\bauth(?:entication)?[\s\-_]+bypass\b|\bsession[\s\-_]+(?:fixation|hijack\w*)\b|\bbrute[\s\-_]?forc\w*\b|\bcredentials?\b|\bpasswords?\b",
    },
    CategoryDef {
        name: "Sensitive Data Exposure",
        description: "Secrets or personal data leaked through storage, transport or output.",
        regex: r"\b(?:sensitive|private|confidential|secret)[\s\-_]+(?:data|information|info|keys?)\b|\b(?:information|info|data|memory)[\s\-_]+(?:leak\w*|disclos\w*|expos\w*)\b|\bleak(?:s|ed|ing|age)?\b|\b(?:plain|clear)[\s\-_]?text\b",
    },
    CategoryDef {
        name: "XML External Entities",
        description: "XML processors resolving attacker-controlled external entities.",
        regex: r"\bxxe\b|\b(?:xml[\s\-_]+)?external[\s\-_]+entit(?:y|ies)\b|\bbillion[\s\-_]+laughs\b",
    },
    CategoryDef {
        name: "Broken Access Control",
        description: "Restrictions on what authenticated users may do are not enforced.",
        regex: ACCESS_AND_CONFIGURATION,
    },
    CategoryDef {
        name: "Security Misconfiguration",
        description: "Insecure defaults, incomplete configuration or overly permissive settings.",
        regex: ACCESS_AND_CONFIGURATION,
    },
    CategoryDef {
        name: "Cross-Site Scripting",
        description: "Untrusted data rendered in a page without validation or escaping.",
        regex: r"\bxss\b|\bcross[\s\-_]?site[\s\-_]+scripting\b|\b(?:un)?escap(?:e|ed|ing)[\s\-_]+(?:html|output)\b|\bsaniti[sz](?:e|ed|es|ing|ation)\b",
    },
    CategoryDef {
        name: "Insecure Deserialization",
        description: "Deserialising untrusted data into live objects.",
        regex: r"\b(?:insecure|unsafe|untrusted)[\s\-_]+(?:de)?seriali[sz]\w*\b|\bdeseriali[sz]ation\b",
    },
    CategoryDef {
        name: "Using Components with Known Vulnerabilities",
        description: "Dependencies or bundled components with published vulnerabilities.",
        regex: r"\bcve-\d{4}-\d{4,}\b|\bknown[\s\-_]+vulnerabilit(?:y|ies)\b|\b(?:outdated|vulnerable|insecure)[\s\-_]+(?:dependenc(?:y|ies)|librar(?:y|ies)|components?|versions?)\b",
    },
    CategoryDef {
        name: "Insufficient Logging & Monitoring",
        description: "Security-relevant events that are not logged or monitored.",
        regex: r"\b(?:insufficient|missing|no)[\s\-_]+(?:logging|monitoring|audit(?:ing)?)\b|\baudit[\s\-_]+(?:logs?|trails?)\b",
    },
    CategoryDef {
        name: "Buffer Overflow",
        description: "Writes or reads past the end of a fixed-size buffer.",
        regex: r"\b(?:buffer|stack|heap)[\s\-_]*(?:overflow|overrun|underflow|underrun)s?\b|\bbof\b",
    },
    CategoryDef {
        name: "Overflow",
        description: "Integer or arithmetic values exceeding their representable range.",
        regex: r"\b(?:(?:integer|int|numeric|arithmetic|signed|unsigned)[\s\-_]+)?(?:overflow|underflow|wrap[\s\-_]?around)s?\b",
    },
    CategoryDef {
        name: "Out-of-Bounds Access",
        description: "Reads or writes outside the bounds of an object.",
        regex: r"\bout[\s\-_]+of[\s\-_]+bounds?\b|\boob\b|\b(?:invalid|illegal|wild)[\s\-_]+(?:read|write|memory[\s\-_]+access)\b",
    },
    CategoryDef {
        name: "Use After Free",
        description: "Memory used after it has been released.",
        regex: r"\buse[\s\-_]+after[\s\-_]+free\b|\buaf\b|\bdouble[\s\-_]+free\b|\bdangling[\s\-_]+pointers?\b",
    },
    CategoryDef {
        name: "Null Pointer Dereference",
        description: "Dereferencing a pointer that may be null.",
        regex: r"\bnull[\s\-_]+(?:pointer|ptr|deref\w*)\b|\bnullptr[\s\-_]+deref\w*\b|\bnpe\b|\bsegfaults?\b|\bsegmentation[\s\-_]+fault\b",
    },
    CategoryDef {
        name: "Memory Leak",
        description: "Allocated memory or resources never released.",
        regex: r"\b(?:memory|mem|resource)[\s\-_]?leak\w*\b",
    },
    CategoryDef {
        name: "Race Condition",
        description: "Behaviour depending on the timing of concurrent operations.",
        regex: r"\brace[\s\-_]+conditions?\b|\bdata[\s\-_]+races?\b|\btoctou\b|\btime[\s\-_]+of[\s\-_]+check\b|\bdeadlocks?\b",
    },
    CategoryDef {
        name: "Denial of Service",
        description: "Inputs that exhaust resources or hang the process.",
        regex: r"\bdenial[\s\-_]+of[\s\-_]+service\b|\b(?:re)?dos\b|\binfinite[\s\-_]+(?:loop|recursion)s?\b|\b(?:resource|cpu|memory|stack)[\s\-_]+exhaustion\b",
    },
    CategoryDef {
        name: "Path Traversal",
        description: "File paths escaping their intended directory.",
        regex: r"\b(?:path|directory|dir)[\s\-_]+traversal\b|\bzip[\s\-_]?slip\b|\.\./",
    },
    CategoryDef {
        name: "Cross-Site Request Forgery",
        description: "State-changing requests accepted without proof of user intent.",
        regex: r"\bcsrf\b|\bxsrf\b|\bcross[\s\-_]?site[\s\-_]+request[\s\-_]+forgery\b",
    },
    CategoryDef {
        name: "Server-Side Request Forgery",
        description: "Server fetching attacker-chosen URLs.",
        regex: r"\bssrf\b|\bserver[\s\-_]?side[\s\-_]+request[\s\-_]+forgery\b",
    },
    CategoryDef {
        name: "Format String",
        description: "Attacker-controlled format strings passed to printf-style functions.",
        regex: r"\bformat[\s\-_]+strings?\b|\bprintf[\s\-_]+(?:vuln\w*|attacks?)\b",
    },
    CategoryDef {
        name: "Cryptographic Failure",
        description: "Weak algorithms, predictable randomness or timing side channels.",
        regex: r"\b(?:weak|broken|insecure)[\s\-_]+(?:crypto\w*|ciphers?|hash\w*|encryption|random\w*)\b|\b(?:md5|sha-?1|rc4)\b|\btiming[\s\-_]+(?:attacks?|leaks?|side[\s\-_]?channels?)\b",
    },
    CategoryDef {
        name: "Privilege Escalation",
        description: "Gaining rights beyond those granted.",
        regex: r"\bprivilege[\s\-_]+escalation\b|\bescalat\w*[\s\-_]+privileges?\b|\bpriv[\s\-_]?esc\b",
    },
    CategoryDef {
        name: "Open Redirect",
        description: "Redirects to attacker-supplied destinations.",
        regex: r"\b(?:open|unvalidated)[\s\-_]+redirects?\b",
    },
    CategoryDef {
        name: "Vulnerability",
        description: "Generic security wording not covered by a specific category.",
        regex: r"\bvulnerab\w*\b|\bsecurity[\s\-_]+(?:fix|issue|bug|flaw|patch|hole|problem)\w*\b|\bexploit\w*\b|\bmalicious\b|\battackers?\b|\bcve\b",
    },
];
