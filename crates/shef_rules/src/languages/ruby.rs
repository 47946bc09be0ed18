//! Ruby insecure-pattern rules.

crate::declare_language!(
    Ruby,
    id: "ruby",
    name: "Ruby",
    extensions: ["rb", "rake"],
    comments: [CommentSyntax::Line("#"), CommentSyntax::Block("=begin", "=end")],
    rules: [
        RuleGroup::new(
            "Injection",
            &[
                "eval",
                "instance_eval",
                "class_eval",
                "system",
                "exec",
                "IO.popen",
                "Open3",
                "constantize",
                "find_by_sql",
            ],
        ),
        RuleGroup::new("Insecure Deserialization", &["Marshal.load", "YAML.load", "Oj.load"]),
        RuleGroup::new("Cross-Site Scripting", &["html_safe", "raw"]),
        RuleGroup::new("Cross-Site Request Forgery", &["skip_forgery_protection", "protect_from_forgery"]),
        RuleGroup::new("Cryptographic Failure", &["MD5", "SHA1", "rand"]),
        RuleGroup::new("Open Redirect", &["redirect_to"]),
        RuleGroup::new("Path Traversal", &["send_file", "File.open", "File.read"]),
        RuleGroup::new("Broken Access Control", &["attr_accessible"]),
    ],
);
