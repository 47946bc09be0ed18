//! Python insecure-pattern rules.

crate::declare_language!(
    Python,
    id: "python",
    name: "Python",
    extensions: ["py", "pyw"],
    comments: [
        CommentSyntax::Line("#"),
        CommentSyntax::Block("\"\"\"", "\"\"\""),
        CommentSyntax::Block("'''", "'''"),
    ],
    rules: [
        RuleGroup::new(
            "Injection",
            &[
                "eval",
                "exec",
                "os.system",
                "os.popen",
                "subprocess.call",
                "subprocess.Popen",
                "subprocess.run",
                "shell=True",
                "commands.getoutput",
            ],
        ),
        RuleGroup::new(
            "Insecure Deserialization",
            &["pickle.load", "pickle.loads", "cPickle.loads", "marshal.loads", "yaml.load", "shelve.open"],
        ),
        RuleGroup::new("XML External Entities", &["xml.sax", "xml.dom.minidom", "lxml.etree", "resolve_entities"]),
        RuleGroup::new(
            "Cryptographic Failure",
            &["md5", "sha1", "random.random", "random.randint", "DES", "ARC4"],
        ),
        RuleGroup::new(
            "Security Misconfiguration",
            &["verify=False", "CERT_NONE", "_create_unverified_context", "DEBUG"],
        ),
        RuleGroup::new("Race Condition", &["mktemp"]),
        RuleGroup::new("Path Traversal", &["extractall", "send_file"]),
        RuleGroup::new("Server-Side Request Forgery", &["urlopen", "requests.get"]),
    ],
);
