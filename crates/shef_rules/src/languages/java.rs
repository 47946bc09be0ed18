//! Java insecure-pattern rules.

crate::declare_language!(
    Java,
    id: "java",
    name: "Java",
    extensions: ["java"],
    comments: [
        CommentSyntax::Line("//"),
        CommentSyntax::Block("/*", "*/"),
        CommentSyntax::Continuation("*"),
    ],
    rules: [
        RuleGroup::new(
            "Injection",
            &[
                "Runtime.getRuntime",
                "ProcessBuilder",
                "createStatement",
                "executeQuery",
                "executeUpdate",
                "ScriptEngine",
            ],
        ),
        RuleGroup::new(
            "Insecure Deserialization",
            &["ObjectInputStream", "readObject", "readUnshared", "XMLDecoder"],
        ),
        RuleGroup::new(
            "XML External Entities",
            &["DocumentBuilderFactory", "SAXParserFactory", "XMLInputFactory", "TransformerFactory"],
        ),
        RuleGroup::new("Cross-Site Scripting", &["getParameter", "getWriter"]),
        RuleGroup::new(
            "Cryptographic Failure",
            &["MD5", "SHA1", "DES", "ECB", "java.util.Random", "Math.random"],
        ),
        RuleGroup::new(
            "Security Misconfiguration",
            &["X509TrustManager", "HostnameVerifier", "ALLOW_ALL_HOSTNAME_VERIFIER"],
        ),
        RuleGroup::new("Path Traversal", &["getResourceAsStream", "FileInputStream"]),
        RuleGroup::new("Null Pointer Dereference", &["NullPointerException"]),
    ],
);
