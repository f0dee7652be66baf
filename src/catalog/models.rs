use serde::{Deserialize, Serialize};

/// One publication entry recovered from a catalog results page
///
/// Records are built once per parse and never mutated afterwards. Fields that
/// the page omits come back empty rather than failing the whole listing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PublicationRecord {
    /// Document number, the first token of the listing title (e.g. "ATP 3-21.8");
    /// falls back to the full title text when the listing has no separator
    pub document_number: String,
    /// Human-readable publication name, empty if the listing has no separator
    pub title: String,
    /// Leading alphabetic prefix of the document number (e.g. "ATP"),
    /// or "Unknown" when the number does not start with uppercase letters
    pub document_type: String,
    /// Distribution format, "pdf" unless the listing says otherwise
    pub file_format: String,
    /// Free-form publication date as printed (e.g. "May 13, 2019"), empty if absent
    pub date: String,
    /// Listing description, or the CAC notice for credential-gated entries
    pub description: String,
    /// Absolute URL of the publication
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_for_the_tool_layer() {
        let record = PublicationRecord {
            document_number: "ATP 3-21.8".to_string(),
            title: "Infantry Platoon and Squad".to_string(),
            document_type: "ATP".to_string(),
            file_format: "pdf".to_string(),
            date: "Apr 1, 2016".to_string(),
            description: "The primary doctrine publication.".to_string(),
            url: "https://armypubs.army.mil/epubs/DR_pubs/ATP_3-21x8.pdf".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: PublicationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
