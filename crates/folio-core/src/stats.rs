//! Summary counters shown above the project and certification lists.

use crate::fixtures::{Certification, Project};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectSummary {
    pub total: usize,
    pub featured: usize,
    /// Distinct tech tags across all projects
    pub tech_used: usize,
}

impl ProjectSummary {
    pub fn of(projects: &[Project]) -> Self {
        let mut tech: Vec<&str> = Vec::new();
        for tag in projects.iter().flat_map(|p| p.tech_stack.iter().copied()) {
            if !tech.contains(&tag) {
                tech.push(tag);
            }
        }

        Self {
            total: projects.len(),
            featured: projects.iter().filter(|p| p.featured).count(),
            tech_used: tech.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificationSummary {
    pub total: usize,
    /// Distinct issuer strings
    pub top_issuers: usize,
}

impl CertificationSummary {
    pub fn of(certifications: &[Certification]) -> Self {
        let mut issuers: Vec<&str> = Vec::new();
        for cert in certifications {
            if !issuers.contains(&cert.issuer) {
                issuers.push(cert.issuer);
            }
        }

        Self {
            total: certifications.len(),
            top_issuers: issuers.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{CERTIFICATIONS, PROJECTS};

    #[test]
    fn test_project_summary() {
        let summary = ProjectSummary::of(PROJECTS);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.featured, 2);
        assert_eq!(summary.tech_used, 12);
    }

    #[test]
    fn test_certification_summary() {
        let summary = CertificationSummary::of(CERTIFICATIONS);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.top_issuers, 3);
    }

    #[test]
    fn test_repeated_issuer_counted_once() {
        let mut certs = CERTIFICATIONS.to_vec();
        certs.push(Certification {
            id: "4",
            issuer: "Google",
            ..CERTIFICATIONS[0]
        });
        let summary = CertificationSummary::of(&certs);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.top_issuers, 3);
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(
            ProjectSummary::of(&[]),
            ProjectSummary { total: 0, featured: 0, tech_used: 0 }
        );
        assert_eq!(CertificationSummary::of(&[]).top_issuers, 0);
    }
}
