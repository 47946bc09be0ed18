//! C# insecure-pattern rules.

crate::declare_language!(
    CSharp,
    id: "csharp",
    name: "C#",
    extensions: ["cs"],
    comments: [
        CommentSyntax::Line("//"),
        CommentSyntax::Block("/*", "*/"),
        CommentSyntax::Continuation("*"),
    ],
    rules: [
        RuleGroup::new(
            "Injection",
            &["SqlCommand", "ExecuteReader", "ExecuteNonQuery", "ExecuteSqlRaw", "Process.Start"],
        ),
        RuleGroup::new(
            "Insecure Deserialization",
            &[
                "BinaryFormatter",
                "SoapFormatter",
                "NetDataContractSerializer",
                "LosFormatter",
                "JavaScriptSerializer",
                "TypeNameHandling",
            ],
        ),
        RuleGroup::new("XML External Entities", &["XmlDocument", "XmlTextReader", "DtdProcessing", "XmlResolver"]),
        RuleGroup::new("Cross-Site Scripting", &["Html.Raw", "Response.Write"]),
        RuleGroup::new(
            "Cryptographic Failure",
            &["MD5", "SHA1", "DESCryptoServiceProvider", "RC2", "System.Random"],
        ),
        RuleGroup::new("Security Misconfiguration", &["ServerCertificateValidationCallback"]),
        RuleGroup::new("Path Traversal", &["Path.Combine", "File.ReadAllText"]),
    ],
);
