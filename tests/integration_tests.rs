use std::io::Write;
use std::process::{Command, Stdio};

/// Helper function to run seer-column with a request document on stdin
fn run_seer_column(args: &[&str], stdin_content: &str) -> Result<String, String> {
    let mut child = Command::new("cargo")
        .args(["run", "--bin", "seer-column", "--"])
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| format!("Failed to spawn process: {}", e))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(stdin_content.as_bytes())
            .map_err(|e| format!("Failed to write to stdin: {}", e))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| format!("Failed to wait for process: {}", e))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).to_string())
    }
}

const JSON_REQUEST: &str = r#"{
    "data": [{"name": "apples"}, {"name": "pears"}],
    "in_element": "fruit_chart",
    "series": {
        "series_label": "name",
        "data_label": "month",
        "data_method": "quantity",
        "data_series": [
            [{"month": "Jan", "quantity": 3}, {"month": "Feb", "quantity": 5}],
            [{"month": "Jan", "quantity": 4}, {"month": "Feb", "quantity": 6}]
        ]
    },
    "chart_options": {"title": "Fruit", "is_3_d": true, "on_select": "chartSelected"}
}"#;

#[test]
fn test_end_to_end_json_request() {
    let result = run_seer_column(&[], JSON_REQUEST);
    assert!(result.is_ok(), "Failed: {:?}", result.err());
    let js = result.unwrap();
    assert!(js.contains("<script type=\"text/javascript\">"));
    assert!(js.contains("'packages':['columnchart']"));
    assert!(js.contains("document.getElementById('fruit_chart')"));
    assert!(js.contains("addColumn('string', 'Date');"));
    assert!(js.contains("addColumn('number', 'apples');"));
    assert!(js.contains("addColumn('number', 'pears');"));
    assert!(js.contains("options['title'] = 'Fruit';"));
    assert!(js.contains("options['is3D'] = true;"));
    assert!(js.contains("'select', chartSelected);"));
}

#[test]
fn test_end_to_end_json_defaults() {
    let request = r#"{
        "data": [{"name": "apples"}],
        "series": {
            "series_label": "name",
            "data_label": "month",
            "data_method": "quantity",
            "data_series": [[{"month": "Jan", "quantity": 3}]]
        }
    }"#;
    let result = run_seer_column(&[], request);
    assert!(result.is_ok(), "Failed: {:?}", result.err());
    let js = result.unwrap();
    assert!(js.contains("document.getElementById('chart')"));
    assert!(js.contains("options['legend'] = 'bottom';"));
    assert!(js.contains("options['height'] = 350;"));
    assert!(js.contains("options['width'] = 550;"));
    assert!(!js.contains("addListener"));
}

#[test]
fn test_end_to_end_csv_request() {
    let csv = "month,apples,pears\nJan,3,4\nFeb,5,6\n";
    let result = run_seer_column(&["--format", "csv", "--element", "sales"], csv);
    assert!(result.is_ok(), "Failed: {:?}", result.err());
    let js = result.unwrap();
    assert!(js.contains("document.getElementById('sales')"));
    assert!(js.contains("addRows(2);"));
    assert!(js.contains("addColumn('number', 'apples');"));
    assert!(js.contains("setCell(0, 0,'Jan');"));
    assert!(js.contains("setCell(1,2,6);"));
}

#[test]
fn test_end_to_end_invalid_json() {
    let result = run_seer_column(&[], "not a chart request");
    assert!(result.is_err(), "Should have failed with a parse error");
    assert!(result.unwrap_err().contains("malformed chart request"));
}

#[test]
fn test_end_to_end_missing_accessor() {
    let request = r#"{
        "data": [{"name": "apples"}],
        "series": {
            "series_label": "name",
            "data_label": "month",
            "data_method": "weight",
            "data_series": [[{"month": "Jan", "quantity": 3}]]
        }
    }"#;
    let result = run_seer_column(&[], request);
    assert!(result.is_err(), "Should have failed with accessor not found");
    assert!(result.unwrap_err().contains("no accessor 'weight'"));
}

#[test]
fn test_end_to_end_empty_collections() {
    let request = r#"{
        "data": [],
        "series": {
            "series_label": "name",
            "data_label": "month",
            "data_method": "quantity",
            "data_series": [[{"month": "Jan", "quantity": 3}]]
        }
    }"#;
    let result = run_seer_column(&[], request);
    assert!(result.is_err(), "Should have failed with missing input");
    assert!(result.unwrap_err().contains("missing required input"));
}

#[test]
fn test_end_to_end_empty_csv() {
    let result = run_seer_column(&["--format", "csv"], "month,apples\n");
    assert!(result.is_err(), "Should have failed with empty CSV error");
    assert!(result.unwrap_err().contains("at least one data row"));
}
