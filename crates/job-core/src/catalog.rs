//! Reference data used to synthesize job postings.
//!
//! The catalog is split in two layers:
//!
//! - [`CatalogSource`] - the raw lookup tables as they appear in a YAML file
//!   (titles, companies, locations and three title-indexed maps)
//! - [`Catalog`] - the validated form, one [`JobCatalogEntry`] per title
//!
//! Going from the first to the second is the only place where a title can
//! turn out to be missing from one of the title-indexed tables, so every
//! configuration problem is reported once, at startup.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Placeholder substituted by the skills string in description templates.
pub const SKILLS_PLACEHOLDER: &str = "{skills}";

// ============================================================================
// Error Types
// ============================================================================

/// Error type for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Error reading catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing or emitting YAML
    #[error("Failed to process catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A title has no entry in one of the title-indexed tables
    #[error("Title '{title}' has no entry in '{table}'")]
    MissingEntry { title: String, table: &'static str },

    /// One of the enumerated lists is empty
    #[error("Catalog list '{0}' is empty")]
    EmptyList(&'static str),

    /// The same title is listed twice
    #[error("Duplicate title: {0}")]
    DuplicateTitle(String),

    /// Salary bounds are not finite or min > max
    #[error("Invalid salary range for '{title}': [{min}, {max}]")]
    InvalidSalaryRange { title: String, min: f64, max: f64 },

    /// A title has no skill options to pick from
    #[error("Title '{0}' has no skill options")]
    EmptySkillOptions(String),

    /// Template does not contain exactly one placeholder
    #[error("Template for '{title}' must contain exactly one {placeholder} placeholder, found {found}")]
    InvalidTemplate {
        title: String,
        placeholder: &'static str,
        found: usize,
    },
}

// ============================================================================
// Raw Tables
// ============================================================================

/// Inclusive salary bounds for a job title.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

impl SalaryRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies in the closed interval `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Raw reference tables, before validation.
///
/// This is the shape of a catalog YAML file:
///
/// ```yaml
/// titles: [Data Scientist]
/// companies: [TechCorp]
/// locations: [Remote]
/// salary_ranges:
///   Data Scientist: { min: 100000, max: 160000 }
/// skills_by_title:
///   Data Scientist: ["Python, R, SQL"]
/// description_templates:
///   Data Scientist: "Analyze datasets using {skills}."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogSource {
    pub titles: Vec<String>,
    pub companies: Vec<String>,
    pub locations: Vec<String>,
    pub salary_ranges: BTreeMap<String, SalaryRange>,
    pub skills_by_title: BTreeMap<String, Vec<String>>,
    pub description_templates: BTreeMap<String, String>,
}

impl CatalogSource {
    /// Parse raw tables from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Render the raw tables as YAML.
    pub fn to_yaml(&self) -> Result<String, CatalogError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// The reference data shipped with the generator.
    pub fn builtin() -> Self {
        let titles = BUILTIN_JOBS
            .iter()
            .map(|job| job.title.to_string())
            .collect();
        let salary_ranges = BUILTIN_JOBS
            .iter()
            .map(|job| {
                (
                    job.title.to_string(),
                    SalaryRange::new(job.salary.0, job.salary.1),
                )
            })
            .collect();
        let skills_by_title = BUILTIN_JOBS
            .iter()
            .map(|job| {
                (
                    job.title.to_string(),
                    job.skills.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();
        let description_templates = BUILTIN_JOBS
            .iter()
            .map(|job| (job.title.to_string(), job.template.to_string()))
            .collect();

        Self {
            titles,
            companies: BUILTIN_COMPANIES.iter().map(|s| s.to_string()).collect(),
            locations: BUILTIN_LOCATIONS.iter().map(|s| s.to_string()).collect(),
            salary_ranges,
            skills_by_title,
            description_templates,
        }
    }
}

// ============================================================================
// Validated Catalog
// ============================================================================

/// Everything known about one job title.
#[derive(Debug, Clone, PartialEq)]
pub struct JobCatalogEntry {
    pub title: String,
    pub salary_range: SalaryRange,
    pub skill_options: Vec<String>,
    pub description_template: String,
}

impl JobCatalogEntry {
    /// Render the description template with the given skills.
    pub fn describe(&self, skills: &str) -> String {
        self.description_template
            .replacen(SKILLS_PLACEHOLDER, skills, 1)
    }
}

/// Validated reference data. Immutable once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<JobCatalogEntry>,
    by_title: HashMap<String, usize>,
    companies: Vec<String>,
    locations: Vec<String>,
}

impl Catalog {
    /// Validate raw tables and build the catalog.
    pub fn build(source: CatalogSource) -> Result<Self, CatalogError> {
        if source.titles.is_empty() {
            return Err(CatalogError::EmptyList("titles"));
        }
        if source.companies.is_empty() {
            return Err(CatalogError::EmptyList("companies"));
        }
        if source.locations.is_empty() {
            return Err(CatalogError::EmptyList("locations"));
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(source.titles.len());

        for title in &source.titles {
            if !seen.insert(title.as_str()) {
                return Err(CatalogError::DuplicateTitle(title.clone()));
            }

            let salary_range = *source.salary_ranges.get(title).ok_or_else(|| {
                CatalogError::MissingEntry {
                    title: title.clone(),
                    table: "salary_ranges",
                }
            })?;
            let skill_options = source
                .skills_by_title
                .get(title)
                .ok_or_else(|| CatalogError::MissingEntry {
                    title: title.clone(),
                    table: "skills_by_title",
                })?
                .clone();
            let description_template = source
                .description_templates
                .get(title)
                .ok_or_else(|| CatalogError::MissingEntry {
                    title: title.clone(),
                    table: "description_templates",
                })?
                .clone();

            let SalaryRange { min, max } = salary_range;
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(CatalogError::InvalidSalaryRange {
                    title: title.clone(),
                    min,
                    max,
                });
            }

            if skill_options.is_empty() {
                return Err(CatalogError::EmptySkillOptions(title.clone()));
            }

            let found = description_template.matches(SKILLS_PLACEHOLDER).count();
            if found != 1 {
                return Err(CatalogError::InvalidTemplate {
                    title: title.clone(),
                    placeholder: SKILLS_PLACEHOLDER,
                    found,
                });
            }

            entries.push(JobCatalogEntry {
                title: title.clone(),
                salary_range,
                skill_options,
                description_template,
            });
        }

        let by_title = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.title.clone(), i))
            .collect();

        Ok(Self {
            entries,
            by_title,
            companies: source.companies,
            locations: source.locations,
        })
    }

    /// The validated built-in catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::build(CatalogSource::builtin())
    }

    /// Load and validate a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        Self::build(CatalogSource::from_yaml(yaml)?)
    }

    /// Load and validate a catalog from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Look up the entry for a title.
    pub fn entry(&self, title: &str) -> Option<&JobCatalogEntry> {
        self.by_title.get(title).map(|&i| &self.entries[i])
    }

    /// All entries, in title-list order.
    pub fn entries(&self) -> &[JobCatalogEntry] {
        &self.entries
    }

    /// All titles, in title-list order.
    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.title.as_str()).collect()
    }

    pub fn companies(&self) -> &[String] {
        &self.companies
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }
}

// ============================================================================
// Built-in Reference Data
// ============================================================================

struct BuiltinJob {
    title: &'static str,
    salary: (f64, f64),
    skills: [&'static str; 3],
    template: &'static str,
}

// Salary ranges reflect the 2025 U.S. IT job market.
const BUILTIN_JOBS: [BuiltinJob; 16] = [
    BuiltinJob {
        title: "AI Architect",
        salary: (120000.0, 200000.0),
        skills: [
            "Python, TensorFlow, PyTorch, AWS",
            "Machine Learning, Deep Learning, NLP",
            "Big Data, Hadoop, Spark",
        ],
        template: "Design and implement AI solutions using {skills}. Lead model development and collaborate with teams to deploy scalable systems.",
    },
    BuiltinJob {
        title: "Machine Learning Specialist",
        salary: (110000.0, 180000.0),
        skills: [
            "Python, Scikit-learn, TensorFlow",
            "Machine Learning, NLP, Pandas",
            "R, SQL, Apache Spark",
        ],
        template: "Develop and optimize ML models with {skills}. Conduct experiments and integrate models into production.",
    },
    BuiltinJob {
        title: "Deep Learning Specialist",
        salary: (115000.0, 185000.0),
        skills: [
            "Python, PyTorch, Keras",
            "Deep Learning, Computer Vision, NLP",
            "TensorFlow, GPU Optimization",
        ],
        template: "Build deep neural networks specializing in {skills}. Optimize for performance in computer vision or NLP.",
    },
    BuiltinJob {
        title: "Data Scientist",
        salary: (100000.0, 160000.0),
        skills: [
            "Python, R, SQL",
            "Tableau, Power BI, Pandas",
            "Machine Learning, Statistical Analysis",
        ],
        template: "Analyze datasets and build predictive models using {skills}. Provide actionable insights to drive business decisions.",
    },
    BuiltinJob {
        title: "Computer Scientist",
        salary: (95000.0, 150000.0),
        skills: [
            "C++, Python, Algorithms",
            "Java, Data Structures",
            "Linux, Research",
        ],
        template: "Research and develop algorithms with {skills}. Contribute to innovative tech projects and publish findings.",
    },
    BuiltinJob {
        title: "Business Intelligence Analyst",
        salary: (80000.0, 130000.0),
        skills: [
            "SQL, Tableau, Power BI",
            "ETL, Data Warehousing",
            "Excel, Looker",
        ],
        template: "Create dashboards and perform data analysis with {skills}. Support strategic decision-making.",
    },
    BuiltinJob {
        title: "Cloud Specialist",
        salary: (90000.0, 150000.0),
        skills: [
            "AWS, Azure, GCP",
            "Terraform, Kubernetes",
            "Docker, Cloud Security",
        ],
        template: "Design and manage cloud infrastructure using {skills}. Ensure scalability and high availability.",
    },
    BuiltinJob {
        title: "Web Developer",
        salary: (75000.0, 120000.0),
        skills: [
            "JavaScript, React, Node.js",
            "HTML, CSS, Angular",
            "MongoDB, Django",
        ],
        template: "Build responsive web applications with {skills}. Collaborate with designers to optimize user experience.",
    },
    BuiltinJob {
        title: "Software Developer",
        salary: (85000.0, 140000.0),
        skills: ["Java, Python, C#", "Spring, .NET, Git", "SQL, REST APIs"],
        template: "Develop and test software applications using {skills}. Write clean code and work with cross-functional teams.",
    },
    BuiltinJob {
        title: "Mobile Developer",
        salary: (80000.0, 130000.0),
        skills: [
            "Swift, Kotlin, Flutter",
            "React Native, Firebase",
            "iOS, Android SDK",
        ],
        template: "Create mobile apps for iOS and Android using {skills}. Ensure seamless user experience and API integration.",
    },
    BuiltinJob {
        title: "DevOps Engineer",
        salary: (100000.0, 160000.0),
        skills: [
            "Docker, Kubernetes, Jenkins",
            "AWS, Terraform, CI/CD",
            "Ansible, Bash",
        ],
        template: "Automate CI/CD pipelines and manage infrastructure with {skills}. Ensure system reliability and scalability.",
    },
    BuiltinJob {
        title: "Help Desk Professional",
        salary: (50000.0, 80000.0),
        skills: [
            "ITIL, ServiceNow, Windows",
            "Troubleshooting, Customer Support",
            "Ticketing Systems",
        ],
        template: "Provide technical support and resolve user issues using {skills}. Maintain IT service management systems.",
    },
    BuiltinJob {
        title: "Desktop Support Professional",
        salary: (55000.0, 85000.0),
        skills: [
            "Windows, Active Directory",
            "Hardware Troubleshooting",
            "Office 365, VPN",
        ],
        template: "Support end-user hardware and software with {skills}. Troubleshoot issues and ensure security.",
    },
    BuiltinJob {
        title: "Cloud Administrator",
        salary: (85000.0, 140000.0),
        skills: [
            "AWS, Azure, Linux",
            "Cloud Monitoring, IAM",
            "VMware, Network Security",
        ],
        template: "Manage cloud environments and monitor performance using {skills}. Implement security best practices.",
    },
    BuiltinJob {
        title: "Cyber Security Professional",
        salary: (95000.0, 160000.0),
        skills: [
            "Wireshark, Splunk, CISSP",
            "Penetration Testing, Firewalls",
            "SIEM, Network Security",
        ],
        template: "Protect systems from threats using {skills}. Conduct vulnerability assessments and implement protocols.",
    },
    BuiltinJob {
        title: "System Administrator",
        salary: (70000.0, 110000.0),
        skills: [
            "Linux, Windows Server",
            "Active Directory, VMware",
            "Network Administration, Bash",
        ],
        template: "Maintain servers and network infrastructure with {skills}. Ensure system uptime and security.",
    },
];

const BUILTIN_COMPANIES: [&str; 15] = [
    "TechCorp",
    "Innovate Solutions",
    "DataDriven Inc.",
    "CloudWave Technologies",
    "SecureSystems",
    "NextGen Analytics",
    "WebWorks",
    "MobileMavens",
    "AI Pioneers",
    "GlobalTech",
    "SmartSolutions",
    "CyberGuard",
    "InfoSys",
    "TechTrend Innovations",
    "FutureProof Tech",
];

const BUILTIN_LOCATIONS: [&str; 15] = [
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "Seattle, WA",
    "Boston, MA",
    "Chicago, IL",
    "Los Angeles, CA",
    "Denver, CO",
    "Atlanta, GA",
    "Remote",
    "Phoenix, AZ",
    "Portland, OR",
    "Miami, FL",
    "Dallas, TX",
    "Houston, TX",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn small_source() -> CatalogSource {
        CatalogSource::from_yaml(
            r#"
titles: [Data Scientist, Web Developer]
companies: [TechCorp]
locations: [Remote]
salary_ranges:
  Data Scientist: { min: 100000, max: 160000 }
  Web Developer: { min: 75000, max: 120000 }
skills_by_title:
  Data Scientist: ["Python, R, SQL"]
  Web Developer: ["HTML, CSS, Angular", "MongoDB, Django"]
description_templates:
  Data Scientist: "Analyze datasets using {skills}."
  Web Developer: "Build web applications with {skills}."
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_builtin_catalog_is_complete() {
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(catalog.entries().len(), 16);
        assert_eq!(catalog.companies().len(), 15);
        assert_eq!(catalog.locations().len(), 15);

        for entry in catalog.entries() {
            assert_eq!(entry.skill_options.len(), 3);
            assert!(entry.salary_range.min < entry.salary_range.max);
        }
    }

    #[test]
    fn test_builtin_data_scientist() {
        let catalog = Catalog::builtin().unwrap();
        let entry = catalog.entry("Data Scientist").unwrap();

        assert_eq!(entry.salary_range, SalaryRange::new(100000.0, 160000.0));
        assert_eq!(
            entry.skill_options,
            vec![
                "Python, R, SQL",
                "Tableau, Power BI, Pandas",
                "Machine Learning, Statistical Analysis"
            ]
        );
        assert!(entry
            .describe("Python, R, SQL")
            .starts_with("Analyze datasets and build predictive models using Python, R, SQL."));
    }

    #[test]
    fn test_titles_keep_list_order() {
        let catalog = Catalog::builtin().unwrap();
        let titles = catalog.titles();
        assert_eq!(titles.first(), Some(&"AI Architect"));
        assert_eq!(titles.last(), Some(&"System Administrator"));
        assert!(catalog.entry("Astronaut").is_none());
    }

    #[test]
    fn test_missing_salary_range() {
        let mut source = small_source();
        source.salary_ranges.remove("Web Developer");

        let err = Catalog::build(source).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingEntry { ref title, table: "salary_ranges" } if title == "Web Developer"
        ));
    }

    #[test]
    fn test_missing_skills_and_template() {
        let mut source = small_source();
        source.skills_by_title.remove("Data Scientist");
        assert!(matches!(
            Catalog::build(source).unwrap_err(),
            CatalogError::MissingEntry {
                table: "skills_by_title",
                ..
            }
        ));

        let mut source = small_source();
        source.description_templates.remove("Data Scientist");
        assert!(matches!(
            Catalog::build(source).unwrap_err(),
            CatalogError::MissingEntry {
                table: "description_templates",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_tables() {
        let mut source = small_source();
        source.companies.clear();
        assert!(matches!(
            Catalog::build(source).unwrap_err(),
            CatalogError::EmptyList("companies")
        ));

        let mut source = small_source();
        source.titles.push("Data Scientist".to_string());
        assert!(matches!(
            Catalog::build(source).unwrap_err(),
            CatalogError::DuplicateTitle(_)
        ));

        let mut source = small_source();
        source
            .salary_ranges
            .insert("Data Scientist".to_string(), SalaryRange::new(10.0, 5.0));
        assert!(matches!(
            Catalog::build(source).unwrap_err(),
            CatalogError::InvalidSalaryRange { .. }
        ));

        let mut source = small_source();
        source
            .skills_by_title
            .insert("Web Developer".to_string(), Vec::new());
        assert!(matches!(
            Catalog::build(source).unwrap_err(),
            CatalogError::EmptySkillOptions(_)
        ));

        let mut source = small_source();
        source
            .description_templates
            .insert("Web Developer".to_string(), "No placeholder".to_string());
        assert!(matches!(
            Catalog::build(source).unwrap_err(),
            CatalogError::InvalidTemplate { found: 0, .. }
        ));
    }

    #[test]
    fn test_yaml_round_trip_of_builtin() {
        let source = CatalogSource::builtin();
        let yaml = source.to_yaml().unwrap();
        let parsed = CatalogSource::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, source);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(small_source().to_yaml().unwrap().as_bytes())
            .unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.titles(), vec!["Data Scientist", "Web Developer"]);

        let missing = Catalog::from_file("/nonexistent/catalog.yaml");
        assert!(matches!(missing, Err(CatalogError::Io(_))));
    }
}
