// Canned response catalog
// One static payload per document category; the text is the contract the
// extension's test-suite asserts against, so treat it as frozen.

use super::{AnalysisResult, DocumentType};

static PRIVACY: AnalysisResult = AnalysisResult {
    short_summary: "This Privacy Policy outlines how the company collects, uses, and protects user data, including personal information, usage analytics, and third-party sharing practices. The policy covers data security measures, user rights, and notification procedures for policy changes.",
    risky_points: [
        "The company reserves the right to share your personal information with trusted third parties without explicit consent for each sharing instance.",
        "Data security measures are described as 'appropriate' but no specific security standards or certifications are mentioned.",
        "The policy can be updated at any time with notification only via email or service announcement, potentially binding users to new terms without explicit consent.",
    ],
    favourable_points: [
        "Users have the right to access, update, or delete their personal information upon request.",
        "The company does not sell personal information to third parties for commercial purposes.",
        "Users can opt out of marketing communications at any time through a simple process.",
    ],
};

static TERMS: AnalysisResult = AnalysisResult {
    short_summary: "The Terms of Service establish the legal framework for using the company's services, covering user licenses, prohibited activities, liability limitations, account termination policies, and dispute resolution procedures. The agreement emphasizes the company's broad discretionary powers.",
    risky_points: [
        "The company can terminate your account at any time for any reason without prior notice or explanation.",
        "The service is provided 'as is' with no warranties, and the company disclaims liability for damages including data loss or business interruption.",
        "Users grant the company broad rights to use, modify, and distribute any content they submit through the service.",
    ],
    favourable_points: [
        "Users retain ownership of their original content while granting necessary licenses for service operation.",
        "The terms include clear guidelines on acceptable use, helping maintain a safe environment for all users.",
        "A structured dispute resolution process is provided, offering some legal recourse for conflicts.",
    ],
};

static LEGAL: AnalysisResult = AnalysisResult {
    short_summary: "This legal agreement establishes the binding terms between the user and the service provider, covering service usage, intellectual property rights, user obligations, and legal remedies. The document emphasizes compliance requirements and limitation of liability.",
    risky_points: [
        "The agreement includes broad indemnification clauses requiring users to defend the company against third-party claims arising from user activities.",
        "Liability limitations are extensive, potentially leaving users with limited recourse for service failures or damages.",
        "The agreement can be modified unilaterally by the company with minimal notice requirements.",
    ],
    favourable_points: [
        "Clear explanation of user rights and responsibilities helps prevent misunderstandings.",
        "The agreement includes provisions for data portability and account closure procedures.",
        "Specific performance standards and service level expectations are outlined for transparency.",
    ],
};

/// Look up the canned payload for a document type.
#[must_use]
pub const fn analysis_for(document_type: DocumentType) -> &'static AnalysisResult {
    match document_type {
        DocumentType::Privacy => &PRIVACY,
        DocumentType::Terms => &TERMS,
        DocumentType::Legal => &LEGAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category_has_its_own_payload() {
        let privacy = analysis_for(DocumentType::Privacy);
        let terms = analysis_for(DocumentType::Terms);
        let legal = analysis_for(DocumentType::Legal);

        assert!(privacy.short_summary.starts_with("This Privacy Policy"));
        assert!(terms
            .short_summary
            .starts_with("The Terms of Service establish the legal framework"));
        assert!(legal.short_summary.starts_with("This legal agreement"));
    }

    #[test]
    fn test_every_payload_has_three_points_each() {
        for doc_type in [
            DocumentType::Privacy,
            DocumentType::Terms,
            DocumentType::Legal,
        ] {
            let payload = analysis_for(doc_type);
            assert_eq!(payload.risky_points.len(), 3);
            assert_eq!(payload.favourable_points.len(), 3);
        }
    }

    #[test]
    fn test_terms_first_risky_point_text() {
        let terms = analysis_for(DocumentType::Terms);
        assert_eq!(
            terms.risky_points[0],
            "The company can terminate your account at any time for any reason without prior notice or explanation."
        );
    }

    #[test]
    fn test_lookup_is_stable() {
        let a = serde_json::to_string(analysis_for(DocumentType::Privacy)).unwrap();
        let b = serde_json::to_string(analysis_for(DocumentType::Privacy)).unwrap();
        assert_eq!(a, b);
    }
}
