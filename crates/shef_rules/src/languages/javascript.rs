//! JavaScript and TypeScript insecure-pattern rules.

crate::declare_language!(
    JavaScript,
    id: "javascript",
    name: "JavaScript",
    extensions: ["js", "jsx", "mjs", "cjs", "ts", "tsx"],
    comments: [
        CommentSyntax::Line("//"),
        CommentSyntax::Block("/*", "*/"),
        CommentSyntax::Continuation("*"),
    ],
    rules: [
        RuleGroup::new(
            "Injection",
            &["eval", "Function", "child_process", "execSync", "spawn", "__proto__"],
        ),
        RuleGroup::new(
            "Cross-Site Scripting",
            &[
                "innerHTML",
                "outerHTML",
                "document.write",
                "insertAdjacentHTML",
                "dangerouslySetInnerHTML",
                "v-html",
            ],
        ),
        RuleGroup::new("Insecure Deserialization", &["unserialize", "node-serialize"]),
        RuleGroup::new("Cryptographic Failure", &["Math.random", "md5", "sha1", "createCipher"]),
        RuleGroup::new("Open Redirect", &["window.location", "location.href"]),
        RuleGroup::new("Path Traversal", &["readFileSync", "createReadStream"]),
        RuleGroup::new(
            "Security Misconfiguration",
            &["rejectUnauthorized", "NODE_TLS_REJECT_UNAUTHORIZED", "Access-Control-Allow-Origin"],
        ),
    ],
);
