use phf::phf_map;

/// The checks shown on the DNS health panel, in display order.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Reachability,
    Mx,
    Autodiscover,
    AutodiscoverSrv,
    Autoconfig,
    Spf,
    Dkim,
    Dmarc,
    DavTxt,
    CaldavSrv,
    CarddavSrv,
    ImapSrv,
    Pop3Srv,
    SubmissionSrv,
}

const CATEGORY_KEYS: phf::Map<&'static str, Category> = phf_map! {
    "reachability" => Category::Reachability,
    "mx" => Category::Mx,
    "autodiscover" => Category::Autodiscover,
    "autodiscover_srv" => Category::AutodiscoverSrv,
    "autoconfig" => Category::Autoconfig,
    "spf" => Category::Spf,
    "txt" => Category::Spf,
    "dkim" => Category::Dkim,
    "dmarc" => Category::Dmarc,
    "dav_txt" => Category::DavTxt,
    "caldav_srv" => Category::CaldavSrv,
    "carddav_srv" => Category::CarddavSrv,
    "imap_srv" => Category::ImapSrv,
    "pop3_srv" => Category::Pop3Srv,
    "submission_srv" => Category::SubmissionSrv,
};

impl Category {
    pub const ALL: [Category; 14] = [
        Category::Reachability,
        Category::Mx,
        Category::Autodiscover,
        Category::AutodiscoverSrv,
        Category::Autoconfig,
        Category::Spf,
        Category::Dkim,
        Category::Dmarc,
        Category::DavTxt,
        Category::CaldavSrv,
        Category::CarddavSrv,
        Category::ImapSrv,
        Category::Pop3Srv,
        Category::SubmissionSrv,
    ];

    /// Stable machine name, accepted back by [`Category::from_key`].
    pub fn key(self) -> &'static str {
        match self {
            Self::Reachability => "reachability",
            Self::Mx => "mx",
            Self::Autodiscover => "autodiscover",
            Self::AutodiscoverSrv => "autodiscover_srv",
            Self::Autoconfig => "autoconfig",
            Self::Spf => "spf",
            Self::Dkim => "dkim",
            Self::Dmarc => "dmarc",
            Self::DavTxt => "dav_txt",
            Self::CaldavSrv => "caldav_srv",
            Self::CarddavSrv => "carddav_srv",
            Self::ImapSrv => "imap_srv",
            Self::Pop3Srv => "pop3_srv",
            Self::SubmissionSrv => "submission_srv",
        }
    }

    /// Panel label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Reachability => "Reachability",
            Self::Mx => "MX Records",
            Self::Autodiscover => "Autodiscover",
            Self::AutodiscoverSrv => "Autodiscover SRV",
            Self::Autoconfig => "Autoconfig",
            Self::Spf => "SPF Records",
            Self::Dkim => "DKIM",
            Self::Dmarc => "DMARC",
            Self::DavTxt => "Caldav(s)/Carddav(s) TXT",
            Self::CaldavSrv => "Caldav(s) SRV",
            Self::CarddavSrv => "Carddav(s) SRV",
            Self::ImapSrv => "IMAP(s) SRV",
            Self::Pop3Srv => "POP3(s) SRV",
            Self::SubmissionSrv => "Submission SRV",
        }
    }

    /// Looks up a category by key. Case and surrounding blanks are ignored,
    /// `-` is accepted in place of `_`.
    pub fn from_key(input: &str) -> Option<Self> {
        let normalized = input.trim().to_ascii_lowercase().replace('-', "_");
        CATEGORY_KEYS.get(normalized.as_str()).copied()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
