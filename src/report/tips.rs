//! Static security guidance shown next to every report.

pub const TIPS_HEADING: &str = "🛡️ Security Best Practices";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityTip {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SECURITY_TIPS: &[SecurityTip] = &[
    SecurityTip {
        icon: "🔐",
        title: "Use Strong Passwords",
        description: "Create unique, complex passwords for each account. Use a password manager to keep track.",
    },
    SecurityTip {
        icon: "🔑",
        title: "Enable 2FA",
        description: "Two-factor authentication adds an extra layer of security to your accounts.",
    },
    SecurityTip {
        icon: "📧",
        title: "Monitor Your Accounts",
        description: "Regularly check your accounts for suspicious activity and enable security alerts.",
    },
    SecurityTip {
        icon: "⚠️",
        title: "Change Compromised Passwords",
        description: "If your email was found in a breach, immediately change passwords for affected accounts.",
    },
    SecurityTip {
        icon: "🛡️",
        title: "Be Wary of Phishing",
        description: "Never click suspicious links or provide sensitive information via email.",
    },
    SecurityTip {
        icon: "🔄",
        title: "Keep Software Updated",
        description: "Regularly update your operating system, browsers, and applications for security patches.",
    },
];
