use crate::core::normalize::{username_from_account, username_from_email};
use crate::domain::model::{PersonRecord, SessionRecord};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MatchError, Result};

/// Position of a required column, located by exact match of the trimmed
/// header text in row 1. Header labels are case-sensitive domain data.
fn find_column(rows: &[Vec<String>], sheet: &str, label: &str) -> Result<usize> {
    let header = rows.first().ok_or_else(|| MatchError::MissingColumn {
        sheet: sheet.to_string(),
        column: label.to_string(),
    })?;

    header
        .iter()
        .position(|cell| cell.trim() == label)
        .ok_or_else(|| MatchError::MissingColumn {
            sheet: sheet.to_string(),
            column: label.to_string(),
        })
}

fn cell<'a>(row: &'a [String], idx: usize) -> &'a str {
    row.get(idx).map(|s| s.trim()).unwrap_or("")
}

/// Shapes the persons sheet into records. Rows with an empty name or email
/// are skipped silently; surviving rows keep their source order.
pub fn extract_persons<C: ConfigProvider>(
    rows: &[Vec<String>],
    config: &C,
) -> Result<Vec<PersonRecord>> {
    let sheet = config.persons_sheet();
    let name_col = find_column(rows, sheet, config.name_column())?;
    let email_col = find_column(rows, sheet, config.email_column())?;
    tracing::debug!(
        "Sheet '{}': '{}' at column {}, '{}' at column {}",
        sheet,
        config.name_column(),
        name_col,
        config.email_column(),
        email_col
    );

    let mut records = Vec::new();
    for row in rows.iter().skip(1) {
        let full_name = cell(row, name_col);
        let email = cell(row, email_col);

        if !full_name.is_empty() && !email.is_empty() {
            records.push(PersonRecord {
                full_name: full_name.to_string(),
                email: email.to_string(),
                username: username_from_email(email),
            });
        }
    }

    Ok(records)
}

/// Shapes the sessions sheet into records. Rows missing any of network
/// code, account, or IP are skipped silently; source order is preserved.
pub fn extract_sessions<C: ConfigProvider>(
    rows: &[Vec<String>],
    config: &C,
) -> Result<Vec<SessionRecord>> {
    let sheet = config.sessions_sheet();
    let code_col = find_column(rows, sheet, config.code_column())?;
    let account_col = find_column(rows, sheet, config.account_column())?;
    let ip_col = find_column(rows, sheet, config.ip_column())?;

    let mut records = Vec::new();
    for row in rows.iter().skip(1) {
        let network_code = cell(row, code_col);
        let account = cell(row, account_col);
        let ip = cell(row, ip_col);

        if !network_code.is_empty() && !account.is_empty() && !ip.is_empty() {
            records.push(SessionRecord {
                network_code: network_code.to_string(),
                account: account.to_string(),
                ip: ip.to_string(),
                username: username_from_account(account),
            });
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;

    fn config() -> CliConfig {
        CliConfig::default_for_tests()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_persons_attaches_username() {
        let rows = vec![
            row(&["ФИО", "Почта"]),
            row(&["Ivan Petrov", "Ivan.Petrov@corp.com"]),
        ];

        let persons = extract_persons(&rows, &config()).unwrap();
        assert_eq!(persons.len(), 1);
        assert_eq!(persons[0].full_name, "Ivan Petrov");
        assert_eq!(persons[0].email, "Ivan.Petrov@corp.com");
        assert_eq!(persons[0].username, "ivan.petrov");
    }

    #[test]
    fn test_extract_persons_trims_and_locates_columns_anywhere() {
        // Extra leading column and padded header text
        let rows = vec![
            row(&["id", " ФИО ", "Почта"]),
            row(&["1", "  Anna Orlova  ", " anna@corp.com "]),
        ];

        let persons = extract_persons(&rows, &config()).unwrap();
        assert_eq!(persons.len(), 1);
        assert_eq!(persons[0].full_name, "Anna Orlova");
        assert_eq!(persons[0].email, "anna@corp.com");
    }

    #[test]
    fn test_extract_persons_drops_incomplete_rows_in_order() {
        let rows = vec![
            row(&["ФИО", "Почта"]),
            row(&["First Person", "first@corp.com"]),
            row(&["No Email", "   "]),
            row(&["", "orphan@corp.com"]),
            row(&["Second Person", "second@corp.com"]),
        ];

        let persons = extract_persons(&rows, &config()).unwrap();
        let names: Vec<&str> = persons.iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(names, vec!["First Person", "Second Person"]);
    }

    #[test]
    fn test_extract_persons_missing_column_errors() {
        let rows = vec![row(&["ФИО", "Email"]), row(&["Ivan", "ivan@corp.com"])];

        let err = extract_persons(&rows, &config()).unwrap_err();
        assert!(matches!(
            err,
            MatchError::MissingColumn { ref column, .. } if column == "Почта"
        ));
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        let rows = vec![row(&["фио", "Почта"])];
        assert!(extract_persons(&rows, &config()).is_err());
    }

    #[test]
    fn test_empty_sheet_reports_missing_column() {
        let rows: Vec<Vec<String>> = vec![];
        let err = extract_persons(&rows, &config()).unwrap_err();
        assert!(matches!(err, MatchError::MissingColumn { .. }));
    }

    #[test]
    fn test_extract_sessions_strips_domain_prefix() {
        let rows = vec![
            row(&["Сетевой код", "Учетная запись", "IP"]),
            row(&["PC01", "CORP\\Ivan.Petrov", "10.0.0.5"]),
            row(&["PC02", "jdoe", "10.0.0.6"]),
        ];

        let sessions = extract_sessions(&rows, &config()).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].username, "ivan.petrov");
        assert_eq!(sessions[0].network_code, "PC01");
        assert_eq!(sessions[0].ip, "10.0.0.5");
        assert_eq!(sessions[1].username, "jdoe");
    }

    #[test]
    fn test_extract_sessions_requires_all_three_fields() {
        let rows = vec![
            row(&["Сетевой код", "Учетная запись", "IP"]),
            row(&["PC01", "CORP\\a", ""]),
            row(&["", "CORP\\b", "10.0.0.2"]),
            row(&["PC03", "", "10.0.0.3"]),
            row(&["PC04", "CORP\\d", "10.0.0.4"]),
        ];

        let sessions = extract_sessions(&rows, &config()).unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].network_code, "PC04");
    }

    #[test]
    fn test_ragged_rows_treated_as_empty_cells() {
        let rows = vec![
            row(&["ФИО", "Почта"]),
            row(&["Short Row"]),
            row(&["Full Row", "full@corp.com"]),
        ];

        let persons = extract_persons(&rows, &config()).unwrap();
        assert_eq!(persons.len(), 1);
        assert_eq!(persons[0].full_name, "Full Row");
    }
}
