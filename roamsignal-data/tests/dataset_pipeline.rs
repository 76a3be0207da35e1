//! End-to-end coverage for the load path: CSV file → raw rows → derived
//! dataset.

use std::io::Write;

use camino::Utf8PathBuf;
use roamsignal_data::{Dataset, DatasetFormat, read_dataset};
use rstest::{fixture, rstest};
use tempfile::TempDir;

const EXPORT: &str = "\
Full name:;Short name;Headquarters;Description;Cellular Networks Installed;Supported Cellular Data Links;Cellular Network Operator;Covered Countries;Covered Regions;Founded
Metro Telecom Ltd;Metro;Mumbai;Urban coverage across Delhi and Agra;GSM 900, UMTS 2100, LTE 1800;HSPA, LTE;yes;India covered;North India;1996
Sierra Cellular;Sierra;Lima;Andean valleys and the coast;GSM 850, LTE 700;LTE;yes;Peru covered;Southern Peru;
Andes Movil;AM;Santiago;Nationwide 5G rollout;LTE 2600, 5G NR;LTE, NR;yes;Chile covered;Central Chile;2012
";

#[fixture]
fn export_dir() -> TempDir {
    let dir = TempDir::new().expect("create tempdir");
    let path = dir.path().join("operators.csv");
    let mut file = std::fs::File::create(&path).expect("create export file");
    file.write_all(EXPORT.as_bytes()).expect("write export");
    dir
}

fn load(dir: &TempDir) -> Dataset {
    let path = Utf8PathBuf::from_path_buf(dir.path().join("operators.csv")).expect("utf8 path");
    let rows = read_dataset(&path, DatasetFormat::default()).expect("read export");
    Dataset::from_raw(rows)
}

#[rstest]
fn derives_flags_and_band_counts(export_dir: TempDir) {
    let dataset = load(&export_dir);
    let metro = &dataset.records()[0];
    assert!(metro.has_2g && metro.has_3g && metro.has_4g);
    assert!(!metro.has_5g);
    assert_eq!(metro.band_count, 3);

    let andes = &dataset.records()[2];
    assert!(andes.has_5g);
    assert_eq!(andes.band_count, 2);
}

#[rstest]
fn builds_sorted_region_index(export_dir: TempDir) {
    let dataset = load(&export_dir);
    assert_eq!(dataset.regions().as_slice(), ["Chile", "India", "Peru"]);
}

#[rstest]
fn imputes_blank_founded_with_median(export_dir: TempDir) {
    let dataset = load(&export_dir);
    // Known years are 1996 and 2012; Sierra's blank cell takes their mean.
    assert_eq!(dataset.records()[1].founded, 2004.0);
}

#[rstest]
fn every_record_has_one_region_and_valid_counts(export_dir: TempDir) {
    let dataset = load(&export_dir);
    for record in dataset.records() {
        assert!(record.region.is_some());
        assert!(record.founded.is_finite());
    }
}
