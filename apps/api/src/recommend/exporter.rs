//! CSV export of a recommendation result.

use thiserror::Error;

use crate::recommend::matcher::Recommendation;
use crate::recommend::presenter::join_certificates;

pub const EXPORT_FILENAME: &str = "AI_Job_Recommender_Recommendations.csv";
pub const EXPORT_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

pub const HEADERS: [&str; 6] = [
    "Job",
    "Description",
    "Min Salary",
    "Max Salary",
    "Certificates",
    "AI Impact",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV flush failed: {0}")]
    Flush(#[source] std::io::Error),
}

/// Serializes `results` to CSV: header row first, one row per job, in order.
/// Quoting follows RFC 4180.
pub fn export_csv(results: &[Recommendation]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;

    for rec in results {
        let (min, max) = rec.details.salary_range;
        let (min, max) = (min.to_string(), max.to_string());
        let certificates = join_certificates(&rec.details.certificates);
        writer.write_record([
            rec.job.as_str(),
            rec.details.description.as_str(),
            min.as_str(),
            max.as_str(),
            certificates.as_str(),
            rec.details.ai_impact.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::details;
    use crate::catalog::{AiImpact, Catalog};
    use crate::recommend::matcher::{match_skills, resolve};

    fn read_back(bytes: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
        let mut reader = csv::Reader::from_reader(bytes);
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();
        (headers, rows)
    }

    #[test]
    fn test_empty_result_is_header_only() {
        let bytes = export_csv(&[]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Job,Description,Min Salary,Max Salary,Certificates,AI Impact\n"
        );
    }

    #[test]
    fn test_round_trip_with_delimiters() {
        let results = vec![
            Recommendation {
                job: "Quoted \"Lead\"".to_string(),
                details: details("Plans, builds,\nand ships.", 1000, 2500, AiImpact::High),
            },
            Recommendation {
                job: "Plain".to_string(),
                details: details("Simple", 0, 0, AiImpact::Low),
            },
        ];

        let (headers, rows) = read_back(&export_csv(&results).unwrap());
        assert_eq!(headers, HEADERS);
        assert_eq!(
            rows,
            vec![
                vec![
                    "Quoted \"Lead\"",
                    "Plans, builds,\nand ships.",
                    "1000",
                    "2500",
                    "Cert A, Cert B",
                    "High"
                ],
                vec!["Plain", "Simple", "0", "0", "Cert A, Cert B", "Low"],
            ]
        );
    }

    #[test]
    fn test_comma_in_description_is_quoted() {
        let results = vec![Recommendation {
            job: "Writer".to_string(),
            details: details("Reads, writes", 1, 2, AiImpact::Medium),
        }];
        let text = String::from_utf8(export_csv(&results).unwrap()).unwrap();
        assert!(text.contains("\"Reads, writes\""), "{text}");
    }

    #[test]
    fn test_builtin_rows_follow_recommendation_order() {
        let catalog = Catalog::builtin();
        let outcome = match_skills(&catalog, "python, excel");
        let results = resolve(&catalog, &outcome.recommendations);

        let (_, rows) = read_back(&export_csv(&results).unwrap());
        let jobs: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(jobs, outcome.recommendations);
        assert_eq!(rows[0][2], "8000");
        assert_eq!(rows[0][3], "15000");
        assert_eq!(rows[0][5], "Medium");
    }
}
