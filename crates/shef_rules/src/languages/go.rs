//! Go insecure-pattern rules.

crate::declare_language!(
    Go,
    id: "go",
    name: "Go",
    extensions: ["go"],
    comments: [
        CommentSyntax::Line("//"),
        CommentSyntax::Block("/*", "*/"),
        CommentSyntax::Continuation("*"),
    ],
    rules: [
        RuleGroup::new(
            "Injection",
            &["exec.Command", "os.StartProcess", "db.Query", "db.Exec", "template.HTML"],
        ),
        RuleGroup::new("Cryptographic Failure", &["md5", "sha1", "des", "rc4", "math/rand"]),
        RuleGroup::new("Security Misconfiguration", &["InsecureSkipVerify"]),
        RuleGroup::new("Out-of-Bounds Access", &["unsafe.Pointer", "reflect.SliceHeader"]),
        RuleGroup::new("Path Traversal", &["filepath.Join", "ioutil.ReadFile"]),
        RuleGroup::new("Server-Side Request Forgery", &["http.Get"]),
    ],
);
