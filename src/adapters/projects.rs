//! In-memory ecosystem project directory.
//!
//! Holds a categorized catalog of Algorand ecosystem projects built
//! from scraped link entries. Categorization is keyword-driven; entries
//! matching known navigation patterns are dropped during ingestion.

use async_trait::async_trait;

use crate::domain::format::Project;
use crate::ports::{DirectoryError, ProjectDirectory};

const CATEGORY_WALLETS: &str = "Wallets";
const CATEGORY_EXPLORERS: &str = "Block Explorers";
const CATEGORY_SDKS: &str = "SDKs";
const CATEGORY_APPLICATIONS: &str = "Applications";
const CATEGORY_ORACLES_BRIDGES: &str = "Oracles & Bridges";
const CATEGORY_INFRA: &str = "API Services and Infrastructure";
const CATEGORY_UNCATEGORIZED: &str = "Uncategorized";

/// Link hrefs that are navigation or official docs, not projects.
const SKIP_PATTERNS: &[&str] = &[
    "developer.algorand.org",
    "discord.com",
    "forum.algorand.org",
    "metrics.algorand.org",
    "github.com/algorand/",
    "/ecosystem-projects",
    "/docs/",
    "/tutorials/",
    "/bootcamps/",
    "/solutions/",
    "/articles/",
    "/events/",
];

/// Keyword buckets tried in order; the first hit wins.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (CATEGORY_WALLETS, &["wallet", "defly", "pera", "exodus"]),
    (CATEGORY_EXPLORERS, &["explorer"]),
    (CATEGORY_SDKS, &["sdk", "library", "package"]),
    (CATEGORY_APPLICATIONS, &["nft", "marketplace", "dex", "swap", "trading"]),
    (CATEGORY_ORACLES_BRIDGES, &["oracle", "bridge"]),
    (CATEGORY_INFRA, &["api", "service", "infrastructure"]),
];

/// One scraped link before processing.
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub text: String,
    pub href: String,
}

pub struct StaticProjectDirectory {
    projects: Vec<Project>,
}

impl StaticProjectDirectory {
    /// Builds the directory from scraped link entries plus a logo map
    /// of (name hint, image URL) pairs.
    pub fn from_entries(entries: Vec<RawEntry>, logos: &[(String, String)]) -> Self {
        let mut projects = Vec::new();
        for entry in entries {
            if SKIP_PATTERNS.iter().any(|p| entry.href.contains(p)) {
                continue;
            }
            let name = extract_name(&entry.text);
            if name.len() < 2 || name.len() > 100 {
                continue;
            }
            let description = extract_description(&entry.text, &name);

            let (github, website) = if entry.href.contains("github.com") {
                (Some(entry.href.clone()), None)
            } else if entry.href.starts_with("http://") || entry.href.starts_with("https://") {
                (None, Some(entry.href.clone()))
            } else {
                (None, None)
            };

            let compact = name.to_lowercase().replace(char::is_whitespace, "");
            let logo = logos
                .iter()
                .find(|(hint, _)| hint.contains(&compact) || compact.contains(hint.as_str()))
                .map(|(_, url)| url.clone());

            projects.push(Project {
                category: categorize(&name, &description).to_string(),
                name,
                description,
                website,
                github,
                logo,
            });
        }
        Self { projects }
    }

    /// A small curated catalog, used when no scraped dataset is wired.
    pub fn with_builtin() -> Self {
        let builtin = [
            ("Pera Wallet", "The self-custodial wallet for Algorand, on mobile and web.", Some("https://perawallet.app"), None),
            ("Defly Wallet", "Mobile wallet with built-in trading and portfolio analytics.", Some("https://defly.app"), None),
            ("Exodus", "Multi-chain wallet with Algorand support.", Some("https://www.exodus.com"), None),
            ("Pera Explorer", "Block explorer for the Algorand network.", Some("https://explorer.perawallet.app"), None),
            ("AlloExplorer", "Block explorer with rich asset and NFD views.", Some("https://allo.info"), None),
            ("js-algorand-sdk", "Official JavaScript SDK library for Algorand.", None, Some("https://github.com/algorand-sdk/js-algorand-sdk")),
            ("py-algorand-sdk", "Python SDK library for building on Algorand.", None, Some("https://github.com/algorand-sdk/py-algorand-sdk")),
            ("AlgoKit", "Developer toolkit and project scaffolding for Algorand apps.", Some("https://algokit.io"), None),
            ("Tinyman", "Decentralized trading protocol, the leading DEX on Algorand.", Some("https://tinyman.org"), None),
            ("Folks Finance", "Lending and borrowing DeFi application.", Some("https://folks.finance"), None),
            ("ALGOxNFT", "NFT marketplace and shuffle platform.", Some("https://algoxnft.com"), None),
            ("Goracle", "Decentralized oracle network feeding off-chain data on-chain.", Some("https://goracle.io"), None),
            ("Messina", "Cross-chain bridge for assets moving to and from Algorand.", Some("https://messina.one"), None),
            ("Nodely", "Free API service endpoints and node infrastructure.", Some("https://nodely.io"), None),
        ];
        let projects = builtin
            .into_iter()
            .map(|(name, description, website, github)| Project {
                category: categorize(name, description).to_string(),
                name: name.to_string(),
                description: description.to_string(),
                website: website.map(str::to_string),
                github: github.map(str::to_string),
                logo: None,
            })
            .collect();
        Self { projects }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Markdown report of the whole catalog, grouped by category.
    pub fn markdown_report(&self) -> String {
        let mut categories: Vec<&str> = self
            .projects
            .iter()
            .map(|p| p.category.as_str())
            .collect();
        categories.sort_unstable();
        categories.dedup();

        let with_github = self.projects.iter().filter(|p| p.github.is_some()).count();
        let mut out = format!(
            "# Algorand Ecosystem Projects\n\n**Total Projects:** {}\n**Projects with GitHub:** {}\n**Categories:** {}\n\n---\n\n",
            self.projects.len(),
            with_github,
            categories.len()
        );
        for category in categories {
            let members: Vec<&Project> = self
                .projects
                .iter()
                .filter(|p| p.category == category)
                .collect();
            out.push_str(&format!("## {}\n\n*{} project(s)*\n\n", category, members.len()));
            for (i, project) in members.iter().enumerate() {
                out.push_str(&format!("### {}. {}\n\n", i + 1, project.name));
                if !project.description.is_empty() {
                    out.push_str(&format!("**Description:** {}\n\n", project.description));
                }
                if let Some(github) = &project.github {
                    out.push_str(&format!("- 🔗 [GitHub]({github})\n"));
                }
                if let Some(website) = &project.website {
                    out.push_str(&format!("- 🌐 [Website]({website})\n"));
                }
                out.push('\n');
            }
            out.push_str("---\n\n");
        }
        out
    }
}

#[async_trait]
impl ProjectDirectory for StaticProjectDirectory {
    async fn search(&self, query: &str) -> Result<Vec<Project>, DirectoryError> {
        let lower = query.to_lowercase();

        // Category hit first: "show me wallets" returns the whole
        // wallet bucket even though no project mentions "show me".
        for (category, keywords) in CATEGORY_KEYWORDS {
            if keywords.iter().any(|kw| lower.contains(kw)) {
                let bucket: Vec<Project> = self
                    .projects
                    .iter()
                    .filter(|p| p.category == *category)
                    .cloned()
                    .collect();
                if !bucket.is_empty() {
                    return Ok(bucket);
                }
            }
        }

        // Fall back to substring match over name and description.
        let terms: Vec<&str> = lower.split_whitespace().filter(|t| t.len() > 2).collect();
        Ok(self
            .projects
            .iter()
            .filter(|p| {
                let haystack =
                    format!("{} {}", p.name.to_lowercase(), p.description.to_lowercase());
                terms.iter().any(|t| haystack.contains(t))
            })
            .cloned()
            .collect())
    }
}

/// First plausible project name line in a scraped link text.
fn extract_name(text: &str) -> String {
    const SKIP_WORDS: &[&str] = &[
        "Featured Project",
        "Sign In",
        "Sign Up",
        "Tutorial",
        "Solution",
        "Article",
        "Submit",
    ];
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !SKIP_WORDS.contains(line) && line.len() > 2 && line.len() < 100)
        .unwrap_or(text.trim())
        .chars()
        .take(100)
        .collect()
}

/// Everything after the name that reads like prose.
fn extract_description(text: &str, name: &str) -> String {
    text.replacen(name, "", 1)
        .lines()
        .map(str::trim)
        .filter(|line| line.len() > 10 && *line != "Featured Project")
        .collect::<Vec<_>>()
        .join(" ")
}

fn categorize(name: &str, description: &str) -> &'static str {
    let combined = format!("{} {}", name.to_lowercase(), description.to_lowercase());
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|kw| combined.contains(kw)) {
            return category;
        }
    }
    CATEGORY_UNCATEGORIZED
}
