//! PHP insecure-pattern rules.

crate::declare_language!(
    Php,
    id: "php",
    name: "PHP",
    extensions: ["php", "php3", "php4", "php5", "phtml"],
    comments: [
        CommentSyntax::Line("//"),
        CommentSyntax::Line("#"),
        CommentSyntax::Block("/*", "*/"),
        CommentSyntax::Continuation("*"),
    ],
    rules: [
        RuleGroup::new(
            "Injection",
            &[
                "eval",
                "exec",
                "system",
                "shell_exec",
                "passthru",
                "popen",
                "proc_open",
                "assert",
                "create_function",
                "mysql_query",
                "mysqli_query",
            ],
        ),
        RuleGroup::new("Cross-Site Scripting", &["echo", "print", "_GET", "_POST", "_REQUEST", "_COOKIE"]),
        RuleGroup::new("Insecure Deserialization", &["unserialize"]),
        RuleGroup::new(
            "Path Traversal",
            &["include", "include_once", "require", "require_once", "readfile", "fopen"],
        ),
        RuleGroup::new("Cryptographic Failure", &["md5", "sha1", "rand", "mt_rand", "crypt"]),
        RuleGroup::new("Server-Side Request Forgery", &["curl_exec", "file_get_contents"]),
        RuleGroup::new("Open Redirect", &["header"]),
    ],
);
