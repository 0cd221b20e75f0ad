// src/config/consts.rs

// Classifier
pub const MIN_DOC_LENGTH: usize = 15_000; // skip short filings
pub const HEADER_WINDOW: usize = 5_000;
pub const LABEL_WINDOW: usize = 2_000;

// Aggregation
pub const TARGET_MATTERS: usize = 5; // M_and_A_1 … M_and_A_5
pub const DOCS_PER_MATTER: usize = 10;

// Reporting
pub const PROGRESS_EVERY: u64 = 2_000;

// Output
pub const DEFAULT_OUT_DIR: &str = "./legal_test_matters";
pub const DEFAULT_CLEAN_DIR: &str = "./sec_filings_clean";
pub const DOC_EXT: &str = "txt";

// Sources
pub const DEFAULT_TEXT_FIELD: &str = "text";
pub const SUBMISSION_FILE: &str = "full-submission.txt";
pub const MIN_SECTION_LEN: usize = 2_000; // smaller sections are cover pages
pub const MAX_SECTION_NAME: usize = 80;

/* ---------------- Rule tables ---------------- */

pub const M_AND_A_PHRASES: &[&str] = &[
    "agreement and plan of merger",
    "asset purchase agreement",
    "stock purchase agreement",
];

pub const FUNDS_PHRASES: &[&str] = &[
    "investment advisory agreement",
    "investment management agreement",
    "limited partnership agreement",
    "subscription agreement",
    "administration agreement",
    "custody agreement",
];

// A Funds phrase only counts alongside real fund context
pub const FUNDS_CONTEXT: &[&str] = &[
    "business development company",
    "investment company act",
    "partnership",
    "fund",
    "limited partner",
];

pub const LEVFIN_PHRASES: &[&str] = &[
    "credit agreement",
    "term loan agreement",
    "guarantee and collateral agreement",
    "security agreement",
];

pub const HERO_NAMES: &[(&str, &str)] = &[
    ("agreement and plan of merger", "HERO_Merger_Agreement"),
    ("asset purchase agreement", "HERO_Asset_Purchase_Agreement"),
    ("stock purchase agreement", "HERO_Stock_Purchase_Agreement"),
    ("investment advisory agreement", "HERO_Investment_Advisory_Agreement"),
    ("investment management agreement", "HERO_Investment_Management_Agreement"),
    ("limited partnership agreement", "HERO_LPA"),
    ("subscription agreement", "HERO_Subscription_Agreement"),
    ("administration agreement", "HERO_Administration_Agreement"),
    ("custody agreement", "HERO_Custody_Agreement"),
    ("credit agreement", "HERO_Credit_Agreement"),
    ("term loan agreement", "HERO_Term_Loan_Agreement"),
    ("guarantee and collateral agreement", "HERO_Guarantee_Collateral"),
    ("security agreement", "HERO_Security_Agreement"),
];

// Priority order: first hit names the file
pub const ANCILLARY_MARKERS: &[(&str, &str)] = &[
    ("voting agreement", "Voting_Agreement"),
    ("support agreement", "Support_Agreement"),
    ("opinion", "Legal_Opinion"),
    ("disclosure", "Disclosure_Schedule"),
    ("exhibit", "Exhibit"),
];
