use std::path::PathBuf;

use gln_cli::cli::RunArgs;
use gln_cli::commands::run_feed;
use tempfile::TempDir;

fn args(feed: &str, source_dir: PathBuf, output_dir: PathBuf) -> RunArgs {
    RunArgs {
        feed: feed.to_string(),
        source_dir,
        input: Vec::new(),
        output_dir: Some(output_dir),
        dry_run: false,
    }
}

#[test]
fn company_run_writes_export_and_findings() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    std::fs::write(
        source.path().join("bedrijfscoderingen_20240115.csv"),
        "company_name;chamber_registration_number;FH_registration_nr;expiry_date\n\
         Kwekerij Jansen;1234;123;\n\
         Van Dijk BV;87654321;123;2024-01-01\n",
    )
    .unwrap();

    let result = run_feed(&args(
        "company",
        source.path().to_path_buf(),
        output.path().to_path_buf(),
    ))
    .expect("company run");

    assert_eq!(result.rows_in, 2);
    assert_eq!(result.rows_out, 2);
    assert!(result.partition.is_none());
    // One export plus the findings report.
    assert_eq!(result.artifacts.len(), 2);
    for artifact in &result.artifacts {
        assert!(artifact.exists(), "missing artifact: {}", artifact.display());
    }

    let export = result
        .artifacts
        .iter()
        .find(|path| path.extension().is_some_and(|ext| ext == "csv"))
        .expect("csv artifact");
    let text = std::fs::read_to_string(export).unwrap();
    // Padded identifier and the derived sector code reach the export.
    assert!(text.contains("00001234"));
    assert!(text.contains("Sector_code"));
    // Row 2's registration number was cleared with its expiry date.
    assert!(!text.contains("2024-01-01"));

    // The duplicate registration pair is in the findings.
    let findings = result
        .artifacts
        .iter()
        .find(|path| path.extension().is_some_and(|ext| ext == "json"))
        .expect("findings artifact");
    let findings_text = std::fs::read_to_string(findings).unwrap();
    assert!(findings_text.contains("duplicate_registration"));
}

#[test]
fn location_run_partitions_completely() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    std::fs::write(
        source.path().join("locatiecoderingen_20240115.csv"),
        "location_name;FH_registration_nr;expiry_date\n\
         Kas 1;123;\n\
         Kas 2;456;2023-06-30\n\
         Kas 3;789;\n",
    )
    .unwrap();

    let result = run_feed(&args(
        "location",
        source.path().to_path_buf(),
        output.path().to_path_buf(),
    ))
    .expect("location run");

    let (active, expired) = result.partition.expect("partitioned feed");
    assert_eq!(active + expired, result.rows_out);
    assert_eq!(active, 2);
    assert_eq!(expired, 1);

    let names: Vec<String> = result
        .artifacts
        .iter()
        .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
        .map(str::to_string)
        .collect();
    assert!(names.iter().any(|name| name.starts_with("location_active_")));
    assert!(names.iter().any(|name| name.starts_with("location_expired_")));
}

#[test]
fn plantion_run_explodes_the_packed_feed() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    std::fs::write(
        source.path().join("GLNPLE_20240115.txt"),
        "GLN_code_requester;company_name;\n\
         country_name_code;expiry_date;\n\
         8,71378E+12;Bloemen BV;NL;;\n\
         8713780000017;Plant BV;NL;2024-01-01;\n",
    )
    .unwrap();

    let result = run_feed(&args(
        "plantion",
        source.path().to_path_buf(),
        output.path().to_path_buf(),
    ))
    .expect("plantion run");

    assert_eq!(result.rows_in, 2);
    let (active, expired) = result.partition.expect("partitioned feed");
    assert_eq!((active, expired), (1, 1));

    let active_export = result
        .artifacts
        .iter()
        .find(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("plantion_active_"))
        })
        .expect("active artifact");
    let text = std::fs::read_to_string(active_export).unwrap();
    // Exponent-damaged requester code restored, production country derived.
    assert!(text.contains("8713780000000"));
    assert!(text.contains("country_prod_code"));
}

#[test]
fn edibulb_run_merges_every_mailbox_drop() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    std::fs::write(
        source.path().join("Mutatie_hobaho_20240115.csv"),
        "GLN;company_name\n8713780000000;Bollenkwekerij Noord\n",
    )
    .unwrap();
    std::fs::write(
        source.path().join("Mutatie_cnb_20240115.csv"),
        "GLN;company_name;city_name\n8713780000017;Hobaho;Lisse\n8713780000024;;\n",
    )
    .unwrap();

    let result = run_feed(&args(
        "edibulb",
        source.path().to_path_buf(),
        output.path().to_path_buf(),
    ))
    .expect("edibulb run");

    assert_eq!(result.sources.len(), 2);
    assert_eq!(result.rows_in, 3);
    // The companyless row is dropped during normalization.
    assert_eq!(result.rows_out, 2);
}

#[test]
fn missing_source_document_is_fatal() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let error = run_feed(&args(
        "company",
        source.path().to_path_buf(),
        output.path().to_path_buf(),
    ))
    .unwrap_err();
    assert!(format!("{error:#}").contains("no source document found"));
}

#[test]
fn dry_run_writes_nothing() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    std::fs::write(
        source.path().join("bedrijfscoderingen_20240115.csv"),
        "company_name\nKwekerij Jansen\n",
    )
    .unwrap();
    let mut run_args = args(
        "company",
        source.path().to_path_buf(),
        output.path().to_path_buf(),
    );
    run_args.dry_run = true;
    let result = run_feed(&run_args).expect("dry run");
    assert!(result.artifacts.is_empty());
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
}
