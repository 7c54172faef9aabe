use changecalc_classify::{
    classify, partition, ChangeStatus, ChangedFileRecord, ClassifyError, OutputFormat,
};

fn records_from(statuses: &[&str]) -> Vec<ChangedFileRecord> {
    statuses
        .iter()
        .enumerate()
        .map(|(i, status)| ChangedFileRecord::new(format!("p{}", i + 1), *status))
        .collect()
}

#[test]
fn csv_all_matches_input_order() {
    let records = records_from(&[
        "added", "modified", "removed", "added", "renamed", "modified", "renamed",
    ]);
    let result = classify(&records, OutputFormat::Csv).unwrap();

    assert_eq!(result.added, "p1,p4");
    assert_eq!(result.modified, "p2,p6");
    assert_eq!(result.removed, "p3");
    assert_eq!(result.renamed, "p5,p7");
    assert_eq!(result.added_or_modified, "p1,p4,p2,p6");
    assert_eq!(result.all, "p1,p2,p3,p4,p5,p6,p7");
    assert_eq!(result.all.split(',').count(), records.len());
}

#[test]
fn buckets_render_consistently_across_formats() {
    let records = records_from(&["renamed", "added", "removed"]);
    let buckets = partition(&records).unwrap();

    assert_eq!(buckets.for_status(ChangeStatus::Renamed), ["p1"]);
    assert_eq!(buckets.render(OutputFormat::SpaceDelimited).all, "p1 p2 p3");
    assert_eq!(
        buckets.render(OutputFormat::Json).all,
        r#"["p1","p2","p3"]"#
    );
    assert_eq!(
        buckets.render(OutputFormat::Csv),
        classify(&records, OutputFormat::Csv).unwrap()
    );
}

#[test]
fn invalid_status_error_message_names_path_and_status() {
    let records = records_from(&["added", "copied"]);
    let err = classify(&records, OutputFormat::Csv).unwrap_err();

    assert!(matches!(err, ClassifyError::InvalidStatus { .. }));
    let message = err.to_string();
    assert!(message.contains("p2"));
    assert!(message.contains("copied"));
}
