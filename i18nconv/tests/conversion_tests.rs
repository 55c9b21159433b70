use i18nconv::{Config, Direction, Error, KeyOrder, run};
use indoc::indoc;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

fn sorted_lines(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    lines.sort();
    lines
}

#[test]
fn test_directory_to_table() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "uiMessages_en.properties", "greeting=Hello\n");
    write(input.path(), "uiMessages_fr.properties", "greeting=Bonjour\n");

    let report = run(&Config::new(input.path()).with_output_dir(output.path())).unwrap();

    assert_eq!(report.direction, Direction::ToTable);
    assert_eq!(report.written, vec![output.path().join("uiMessages.csv")]);
    assert_eq!(
        read(output.path(), "uiMessages.csv"),
        "Key,en,fr\ngreeting,Hello,Bonjour\n"
    );
}

#[test]
fn test_table_to_directory() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let table = input.path().join("uiMessages.csv");
    fs::write(&table, "Key,en,fr\ngreeting,Hello,Bonjour\n").unwrap();

    let report = run(&Config::new(&table).with_output_dir(output.path())).unwrap();

    assert_eq!(report.direction, Direction::ToResources);
    assert_eq!(report.languages, vec!["en", "fr"]);
    assert_eq!(read(output.path(), "uiMessages_en.properties"), "greeting=Hello\n");
    assert_eq!(read(output.path(), "uiMessages_fr.properties"), "greeting=Bonjour\n");
}

#[test]
fn test_comments_and_whitespace_in_resources() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(
        input.path(),
        "app_en.properties",
        indoc! {"
            # Main screen
            app.title = My App

            app.greeting=  Hello there
        "},
    );
    write(
        input.path(),
        "app_es.properties",
        indoc! {"
            app.title=Mi Aplicación
            # saludo
            app.greeting=Hola
        "},
    );

    run(&Config::new(input.path()).with_output_dir(output.path())).unwrap();

    assert_eq!(
        read(output.path(), "uiMessages.csv"),
        indoc! {"
            Key,en,es
            app.title,My App,Mi Aplicación
            app.greeting,Hello there,Hola
        "}
    );
}

#[test]
fn test_sorted_key_order() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(
        input.path(),
        "uiMessages_en.properties",
        "d.c=4\na.b=1\nb.e=2\n",
    );

    run(&Config::new(input.path())
        .with_output_dir(output.path())
        .with_key_order(KeyOrder::Sorted))
    .unwrap();

    assert_eq!(read(output.path(), "uiMessages.csv"), "Key,en\na.b,1\nb.e,2\nd.c,4\n");
}

#[test]
fn test_empty_directory_writes_nothing() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "readme.txt", "not a resource");

    let error = run(&Config::new(input.path()).with_output_dir(output.path())).unwrap_err();

    assert!(matches!(error, Error::NoInputFiles { .. }));
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn test_malformed_file_name_writes_nothing() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "messages.properties", "greeting=Hello\n");

    let error = run(&Config::new(input.path()).with_output_dir(output.path())).unwrap_err();

    assert!(matches!(error, Error::MalformedFilename { segments: 1, .. }));
    assert!(!output.path().join("uiMessages.csv").exists());
}

#[test]
fn test_malformed_record_aborts() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "uiMessages_en.properties", "ok=fine\nfoo = bar = baz\n");

    let error = run(&Config::new(input.path()).with_output_dir(output.path())).unwrap_err();

    match error {
        Error::MalformedRecord { path, line, parts } => {
            assert_eq!(path, input.path().join("uiMessages_en.properties"));
            assert_eq!(line, 2);
            assert_eq!(parts, 3);
        }
        other => panic!("Expected MalformedRecord, got {:?}", other),
    }
    assert!(!output.path().join("uiMessages.csv").exists());
}

#[test]
fn test_short_row_fails_without_output() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let table = input.path().join("uiMessages.csv");
    fs::write(&table, "Key,en,fr\ngreeting,Hello,Bonjour\nfarewell,Goodbye\n").unwrap();

    let error = run(&Config::new(&table).with_output_dir(output.path())).unwrap_err();

    match error {
        Error::MissingTranslation { key, language } => {
            assert_eq!(key, "farewell");
            assert_eq!(language, "fr");
        }
        other => panic!("Expected MissingTranslation, got {:?}", other),
    }
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_key_in_one_language_round_trip_fails() {
    let input = TempDir::new().unwrap();
    let middle = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "uiMessages_en.properties", "greeting=Hello\nonly.en=Only\n");
    write(input.path(), "uiMessages_fr.properties", "greeting=Bonjour\n");

    run(&Config::new(input.path()).with_output_dir(middle.path())).unwrap();
    assert_eq!(
        read(middle.path(), "uiMessages.csv"),
        "Key,en,fr\ngreeting,Hello,Bonjour\nonly.en,Only\n"
    );

    let error = run(&Config::new(middle.path().join("uiMessages.csv")).with_output_dir(output.path()))
        .unwrap_err();
    assert!(matches!(error, Error::MissingTranslation { .. }));
}

#[test]
fn test_existing_output_is_truncated() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let table = input.path().join("uiMessages.csv");
    fs::write(&table, "Key,en\ngreeting,Hi\n").unwrap();
    write(
        output.path(),
        "uiMessages_en.properties",
        "stale=content that is much longer than the new file\n",
    );

    run(&Config::new(&table).with_output_dir(output.path())).unwrap();

    assert_eq!(read(output.path(), "uiMessages_en.properties"), "greeting=Hi\n");
}

#[test]
fn test_duplicate_table_rows_keep_last() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let table = input.path().join("uiMessages.csv");
    fs::write(&table, "Key,en\ngreeting,Hi\nfarewell,Bye\ngreeting,Hello\n").unwrap();

    let report = run(&Config::new(&table).with_output_dir(output.path())).unwrap();

    assert_eq!(report.keys, 2);
    assert_eq!(
        read(output.path(), "uiMessages_en.properties"),
        "greeting=Hello\nfarewell=Bye\n"
    );
}

#[test]
fn test_round_trip_preserves_values() {
    let input = TempDir::new().unwrap();
    let middle = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let en = "bKey.subKey=value\naKey.sub=value\ncKey.subKey=value\n";
    let de = "bKey.subKey=Wert\naKey.sub=Wert\ncKey.subKey=Wert\n";
    write(input.path(), "uiMessages_en.properties", en);
    write(input.path(), "uiMessages_de.properties", de);

    run(&Config::new(input.path()).with_output_dir(middle.path())).unwrap();
    run(&Config::new(middle.path().join("uiMessages.csv")).with_output_dir(output.path()))
        .unwrap();

    let round_tripped = read(output.path(), "uiMessages_en.properties");
    assert_eq!(
        sorted_lines(&round_tripped),
        vec!["aKey.sub=value", "bKey.subKey=value", "cKey.subKey=value"]
    );
    assert_eq!(
        sorted_lines(&read(output.path(), "uiMessages_de.properties")),
        sorted_lines(de)
    );
}

#[test]
fn test_sorted_lines_helper_treats_dot_as_plain_character() {
    assert_eq!(sorted_lines("a.b\nd.c\nb.e\n"), vec!["a.b", "b.e", "d.c"]);
}
