//! Integration tests for the full conversion pipeline.

use std::fs;

use chemked::{
    ApparatusKind, ChemkedError, Converter, DetectionMethod, ExperimentRecord, IgnitionTarget,
    MockLookup,
};

// =============================================================================
// Fixtures
// =============================================================================

const SHOCK_TUBE_XML: &str = r#"<experiment>
    <fileAuthor>Kyle Niemeyer</fileAuthor>
    <fileVersion><major>1</major><minor>0</minor></fileVersion>
    <bibliographyLink preferredKey="Smith2001"/>
    <experimentType>Ignition delay measurement</experimentType>
    <apparatus><kind>shock tube</kind></apparatus>
    <commonProperties>
        <property name="initial composition">
            <component>
                <speciesLink preferredKey="H2" InChI="1S/H2/h1H"/>
                <amount units="mole fraction">0.00444</amount>
            </component>
            <component>
                <speciesLink preferredKey="O2" InChI="1S/O2/c1-2"/>
                <amount units="mole fraction">0.00566</amount>
            </component>
        </property>
        <property name="temperature" units="K">
            <value>1000</value>
        </property>
    </commonProperties>
    <ignitionType target="P" type="max"/>
    <dataGroup id="dg1">
        <property id="x1" name="time" units="s"/>
        <property id="x2" name="pressure" units="atm"/>
        <property id="x3" name="ignition delay" units="ms"/>
        <dataPoint><x1>0.001</x1><x2>2.5</x2><x3>1.23</x3></dataPoint>
    </dataGroup>
</experiment>"#;

const RCM_XML: &str = r#"<experiment>
    <fileAuthor>Kyle Niemeyer</fileAuthor>
    <fileVersion><major>1</major><minor>0</minor></fileVersion>
    <bibliographyLink doi="10.1002/kin.20218"/>
    <experimentType>Ignition delay measurement</experimentType>
    <apparatus><kind>rapid compression machine</kind></apparatus>
    <commonProperties>
        <property name="initial composition">
            <component>
                <speciesLink preferredKey="H2"/>
                <amount units="mole fraction">0.125</amount>
            </component>
        </property>
        <property name="pressure" units="Torr">
            <value>750</value>
        </property>
    </commonProperties>
    <ignitionType target="P" type="d/dt max"/>
    <dataGroup id="dg1">
        <property id="x1" name="temperature" units="K"/>
        <property id="x3" name="ignition delay" units="ms"/>
        <dataPoint><x1>700</x1><x3>45.0</x3></dataPoint>
    </dataGroup>
    <dataGroup id="dg2">
        <property id="x4" name="time" units="s"/>
        <property id="x5" name="volume" units="cm3"/>
        <dataPoint><x4>0.0</x4><x5>500.0</x5></dataPoint>
        <dataPoint><x4>0.001</x4><x5>450.0</x5></dataPoint>
    </dataGroup>
</experiment>"#;

fn convert(xml: &str) -> chemked::Result<String> {
    Converter::new().convert_to_yaml(xml, "experiment.xml", None, None)
}

fn read(xml: &str) -> chemked::Result<ExperimentRecord> {
    Converter::new().read_experiment(xml, "experiment.xml")
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn test_shock_tube_conversion() {
    let mut record = read(SHOCK_TUBE_XML).expect("conversion failed");
    record.broadcast_common_properties();

    assert_eq!(record.file_author.name, "Kyle Niemeyer");
    assert_eq!(record.file_version, 1);
    assert_eq!(record.apparatus.kind, ApparatusKind::ShockTube);
    assert_eq!(record.reference.citation.as_deref(), Some("Smith2001"));
    assert_eq!(record.reference.journal, None);
    assert_eq!(
        record.reference.detail.as_deref(),
        Some("Converted from experiment.xml")
    );

    assert_eq!(record.datapoints.len(), 1);
    let datapoint = &record.datapoints[0];
    assert_eq!(
        datapoint.values.get("time"),
        Some(&vec!["0.001 s".to_string()])
    );
    assert_eq!(
        datapoint.values.get("pressure"),
        Some(&vec!["2.5 atm".to_string()])
    );
    assert_eq!(
        datapoint.values.get("ignition-delay"),
        Some(&vec!["1.23 ms".to_string()])
    );
    assert_eq!(
        datapoint.values.get("temperature"),
        Some(&vec!["1000 K".to_string()])
    );

    let ignition = datapoint.ignition_type.as_ref().expect("merged in");
    assert_eq!(ignition.target, IgnitionTarget::Pressure);
    assert_eq!(ignition.method, DetectionMethod::Max);

    let composition = datapoint.composition.as_ref().expect("merged in");
    assert_eq!(composition.species.len(), 2);
}

#[test]
fn test_ohex_target_is_renamed() {
    let xml = SHOCK_TUBE_XML.replace(r#"target="P""#, r#"target="OHEX""#);
    let record = read(&xml).unwrap();

    let ignition = record.common_properties.ignition_type.as_ref().unwrap();
    assert_eq!(ignition.target, IgnitionTarget::OhExcited);

    let yaml = convert(&xml).unwrap();
    assert!(yaml.contains("target: OH*"));
}

#[test]
fn test_rcm_volume_history() {
    let converter = Converter::new().with_lookup(MockLookup::with_sample_reference());
    let record = converter.read_experiment(RCM_XML, "rcm.xml").unwrap();

    assert_eq!(record.apparatus.kind, ApparatusKind::RapidCompressionMachine);
    assert_eq!(
        record.common_properties.pressure,
        Some(vec!["750 torr".to_string()])
    );

    assert_eq!(record.datapoints.len(), 1);
    let history = record.datapoints[0].volume_history.as_ref().unwrap();
    assert_eq!(history.values, vec![[0.0, 500.0], [0.001, 450.0]]);

    // The DOI resolved through the lookup service.
    assert_eq!(record.reference.doi.as_deref(), Some("10.1002/kin.20218"));
    assert_eq!(
        record.reference.journal.as_deref(),
        Some("International Journal of Chemical Kinetics")
    );
    assert_eq!(record.reference.year, Some(2007));
}

#[test]
fn test_two_groups_on_shock_tube_fail() {
    let xml = RCM_XML.replace("rapid compression machine", "shock tube");
    let err = read(&xml).unwrap_err();

    assert!(matches!(err, ChemkedError::Inconsistency(_)));
}

#[test]
fn test_connectivity_failure_degrades_and_succeeds() {
    let converter = Converter::new().with_lookup(MockLookup::unreachable());
    let record = converter.read_experiment(RCM_XML, "rcm.xml").unwrap();

    assert_eq!(record.reference.doi.as_deref(), Some("10.1002/kin.20218"));
    assert_eq!(record.reference.journal, None);
    assert_eq!(record.reference.authors, None);
}

#[test]
fn test_lookup_not_found_aborts() {
    let converter = Converter::new().with_lookup(MockLookup::not_found());
    let err = converter
        .read_experiment(RCM_XML, "rcm.xml")
        .unwrap_err();

    assert!(matches!(err, ChemkedError::LookupNotFound(_)));
}

#[test]
fn test_volume_and_pressure_rise_conflict() {
    let xml = r#"<experiment>
        <fileAuthor>A</fileAuthor>
        <fileVersion><major>1</major><minor>0</minor></fileVersion>
        <bibliographyLink preferredKey="Smith2001"/>
        <experimentType>Ignition delay measurement</experimentType>
        <apparatus><kind>shock tube</kind></apparatus>
        <commonProperties>
            <property name="pressure rise" units="1/ms">
                <value>0.10</value>
            </property>
        </commonProperties>
        <ignitionType target="P" type="max"/>
        <dataGroup id="dg1">
            <property id="x1" name="time" units="s"/>
            <property id="x2" name="volume" units="cm3"/>
            <property id="x3" name="ignition delay" units="ms"/>
            <dataPoint><x1>0.001</x1><x2>500.0</x2><x3>1.23</x3></dataPoint>
        </dataGroup>
    </experiment>"#;

    let err = read(xml).unwrap_err();
    assert!(
        matches!(err, ChemkedError::Inconsistency(msg) if msg.contains("pressure rise"))
    );
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_conversion_is_idempotent() {
    let first = convert(SHOCK_TUBE_XML).unwrap();
    let second = convert(SHOCK_TUBE_XML).unwrap();
    assert_eq!(first, second);

    let converter = Converter::new().with_lookup(MockLookup::with_sample_reference());
    let first = converter
        .convert_to_yaml(RCM_XML, "rcm.xml", None, None)
        .unwrap();
    let second = converter
        .convert_to_yaml(RCM_XML, "rcm.xml", None, None)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_yaml_round_trips_to_same_record() {
    let yaml = convert(SHOCK_TUBE_XML).unwrap();
    let parsed: ExperimentRecord = serde_yaml::from_str(&yaml).unwrap();

    let mut expected = read(SHOCK_TUBE_XML).unwrap();
    expected.broadcast_common_properties();
    assert_eq!(parsed, expected);
}

#[test]
fn test_author_overrides() {
    let yaml = Converter::new()
        .convert_to_yaml(
            SHOCK_TUBE_XML,
            "experiment.xml",
            Some("Morgan Mayer"),
            Some("0000-0001-7700-0000"),
        )
        .unwrap();

    let record: ExperimentRecord = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(record.file_author.name, "Morgan Mayer");
    assert_eq!(
        record.file_author.orcid.as_deref(),
        Some("0000-0001-7700-0000")
    );
}

#[test]
fn test_convert_file_writes_alongside_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("st_experiment.xml");
    fs::write(&input, SHOCK_TUBE_XML).unwrap();

    let destination = Converter::new()
        .convert_file(&input, None, None, None)
        .unwrap();

    assert_eq!(destination, dir.path().join("st_experiment.yaml"));
    let yaml = fs::read_to_string(&destination).unwrap();
    let record: ExperimentRecord = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(record.datapoints.len(), 1);
}

#[test]
fn test_convert_file_honors_output_directory() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    let input = input_dir.path().join("experiment.xml");
    fs::write(&input, SHOCK_TUBE_XML).unwrap();

    let destination = Converter::new()
        .convert_file(&input, Some(output_dir.path()), None, None)
        .unwrap();

    assert_eq!(destination, output_dir.path().join("experiment.yaml"));
    assert!(destination.exists());
}

#[test]
fn test_failed_conversion_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("experiment.xml");
    let xml = SHOCK_TUBE_XML.replace("Ignition delay measurement", "Flame speed measurement");
    fs::write(&input, xml).unwrap();

    let err = Converter::new()
        .convert_file(&input, None, None, None)
        .unwrap_err();

    assert!(matches!(err, ChemkedError::UndefinedKeyword(_)));
    assert!(!dir.path().join("experiment.yaml").exists());
}
