use parking_lot_sim::app_config::AppConfig;
use parking_lot_sim::run_command_file;
use std::fs;
use tempfile::TempDir;

fn run_commands(commands: &str, config: AppConfig) -> String {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("commands.txt");
    fs::write(&path, commands).unwrap();

    let mut output = Vec::new();
    run_command_file(&path, config, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_full_session() {
    let commands = "\
create_parking_lot 6
park KA-01-HH-1234
park KA-01-HH-9999
park KA-01-BB-0001
park KA-01-HH-7777
park KA-01-HH-2701
park KA-01-HH-3141
leave KA-01-HH-3141 4
status
park KA-01-P-333
park DL-12-AA-9999
leave KA-01-HH-1234 4
leave KA-01-BB-0001 6
leave DL-12-AA-9999 2
park KA-09-HH-0987
park CA-09-IO-1111
park KA-09-HH-0123
status
";

    let expected = "\
Allocated slot number: 1
Allocated slot number: 2
Allocated slot number: 3
Allocated slot number: 4
Allocated slot number: 5
Allocated slot number: 6
Registration number KA-01-HH-3141 with Slot Number 6 is free with Charge $30
Slot No. Registration No.
1 KA-01-HH-1234
2 KA-01-HH-9999
3 KA-01-BB-0001
4 KA-01-HH-7777
5 KA-01-HH-2701
Allocated slot number: 6
Sorry, parking lot is full
Registration number KA-01-HH-1234 with Slot Number 1 is free with Charge $30
Registration number KA-01-BB-0001 with Slot Number 3 is free with Charge $50
Registration number DL-12-AA-9999 not found
Allocated slot number: 1
Allocated slot number: 3
Sorry, parking lot is full
Slot No. Registration No.
1 KA-09-HH-0987
2 KA-01-HH-9999
3 CA-09-IO-1111
4 KA-01-HH-7777
5 KA-01-HH-2701
6 KA-01-P-333
";

    assert_eq!(run_commands(commands, AppConfig::default()), expected);
}

#[test]
fn test_recreating_lot_discards_vehicles() {
    let output = run_commands(
        "create_parking_lot 2\npark A\ncreate_parking_lot 3\nstatus\nleave A 1\n",
        AppConfig::default(),
    );

    assert_eq!(
        output,
        "Allocated slot number: 1\n\
         Slot No. Registration No.\n\
         Registration number A not found\n"
    );
}

#[test]
fn test_duplicate_registration_is_reported() {
    let output = run_commands("create_parking_lot 2\npark A\npark A\nstatus\n", AppConfig::default());

    assert_eq!(
        output,
        "Allocated slot number: 1\n\
         Registration number A is already parked at slot 1\n\
         Slot No. Registration No.\n\
         1 A\n"
    );
}

#[test]
fn test_custom_tariff_and_capacity_limit() {
    let config = AppConfig {
        base_charge: 5,
        base_hours: 1,
        hourly_charge: 2,
        max_capacity: Some(4),
    };
    let output = run_commands("create_parking_lot 5\ncreate_parking_lot 4\npark A\nleave A 3\n", config);

    assert_eq!(
        output,
        "Invalid capacity: 5\n\
         Allocated slot number: 1\n\
         Registration number A with Slot Number 1 is free with Charge $9\n"
    );
}

#[test]
fn test_windows_line_endings_and_mixed_case() {
    let output = run_commands("CREATE_PARKING_LOT 1\r\nPark KA-01\r\nStatus\r\n", AppConfig::default());

    assert_eq!(
        output,
        "Allocated slot number: 1\nSlot No. Registration No.\n1 KA-01\n"
    );
}

#[test]
fn test_reference_example_output() {
    let output = run_commands(
        "create_parking_lot 2\npark KA-01\npark KA-02\npark KA-03\nleave KA-01 3\npark KA-03\n",
        AppConfig::default(),
    );

    assert_eq!(
        output,
        "Allocated slot number: 1\n\
         Allocated slot number: 2\n\
         Sorry, parking lot is full\n\
         Registration number KA-01 with Slot Number 1 is free with Charge $20\n\
         Allocated slot number: 1\n"
    );
}

#[test]
fn test_large_lot_is_accepted_by_default() {
    let output = run_commands("create_parking_lot 20000\npark A\n", AppConfig::default());

    assert_eq!(output, "Allocated slot number: 1\n");
}

#[test]
fn test_invalid_utf8_line_does_not_stop_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("commands.txt");
    fs::write(&path, b"create_parking_lot 2\npark M\xfcNCHEN-1\npark KA-02\nstatus\n").unwrap();

    let mut output = Vec::new();
    let summary = run_command_file(&path, AppConfig::default(), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("Allocated slot number: 1\nAllocated slot number: 2\n"));
    assert!(output.ends_with("2 KA-02\n"));
    assert_eq!(summary.executed, 4);
}
