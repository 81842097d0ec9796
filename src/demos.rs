//! The fixed demo set.

/// One launchable demo: a Streamlit entry script and its assigned port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSpec {
    /// Short name used on the command line and in logs.
    pub name: &'static str,
    pub label: &'static str,
    pub script: &'static str,
    pub port: u16,
}

/// All demos, in launch order. Ports must stay distinct.
pub const DEMOS: &[DemoSpec] = &[
    DemoSpec {
        name: "resume",
        label: "Resume Tailor",
        script: "app.py",
        port: 8501,
    },
    DemoSpec {
        name: "landing",
        label: "Landing Page Generator",
        script: "website_generator.py",
        port: 8502,
    },
    DemoSpec {
        name: "intel",
        label: "Competitor Intel",
        script: "competitor_intel.py",
        port: 8503,
    },
];

/// Look up a demo by its short name.
pub fn find(name: &str) -> Option<&'static DemoSpec> {
    DEMOS.iter().find(|d| d.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ports_are_distinct() {
        let ports: HashSet<u16> = DEMOS.iter().map(|d| d.port).collect();
        assert_eq!(ports.len(), DEMOS.len());
    }

    #[test]
    fn names_are_distinct() {
        let names: HashSet<&str> = DEMOS.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), DEMOS.len());
    }

    #[test]
    fn resume_demo_is_first_on_8501() {
        assert_eq!(DEMOS[0].name, "resume");
        assert_eq!(DEMOS[0].port, 8501);
    }

    #[test]
    fn find_by_name() {
        assert_eq!(find("intel").map(|d| d.port), Some(8503));
        assert!(find("payroll").is_none());
    }
}
