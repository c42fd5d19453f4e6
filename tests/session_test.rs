use progress_card::domain::model::{Mark, StudentKey};
use progress_card::domain::ports::MarkRepository;
use progress_card::{Console, CsvFileRepository, ProgressCard, TerminalChart};
use std::io::Cursor;
use tempfile::TempDir;

fn run(dir: &TempDir, name: &str, script: &str) -> (Vec<Mark>, String, String) {
    let repository = CsvFileRepository::new(dir.path());
    let charts = TerminalChart::new(Vec::new(), 20);
    let console = Console::new(Cursor::new(script.to_string()), Vec::new());

    let mut card = ProgressCard::open(name, repository, charts, console).unwrap();
    card.run().unwrap();

    let (store, _, charts, console) = card.into_parts();
    (
        store.marks().to_vec(),
        String::from_utf8(console.into_output()).unwrap(),
        String::from_utf8(charts.into_inner()).unwrap(),
    )
}

#[test]
fn test_marks_persist_between_sessions() {
    let dir = TempDir::new().unwrap();

    let script = "1\n1\nmaths\n80\n\n1\n1\nphysics\n60\n\n1\n2\nchem\n90\n\n5\n";
    let (marks, output, _) = run(&dir, "Ada Lovelace", script);
    assert_eq!(marks.len(), 3);
    assert!(output.contains("Added 'Chem: 90%' for Year 2!"));

    let content =
        std::fs::read_to_string(dir.path().join("student_marks_Ada_Lovelace.csv")).unwrap();
    assert_eq!(
        content,
        "subject,score,year\nMaths,80,1\nPhysics,60,1\nChem,90,2\n"
    );

    let (marks, output, charts) = run(&dir, "Ada Lovelace", "2\n\n3\n\n4\n\n5\n");
    assert_eq!(marks[2], Mark::new("Chem", 90, 2));
    assert!(output.contains("1. Year 1 - Maths: 80%"));
    assert!(output.contains("2. Year 1 - Physics: 60%"));
    assert!(output.contains("3. Year 2 - Chem: 90%"));

    assert!(charts.contains("Average Performance Per Year for Ada Lovelace"));
    assert!(charts.contains("Year 1 | ██████████████       70.0"));
    assert!(charts.contains("Year 2 | ██████████████████   90.0"));
    assert!(!charts.contains("Year 3"));
    assert!(charts.contains("Average Score by Subject for Ada Lovelace"));
    assert!(charts.contains("39.1%"));
}

#[test]
fn test_students_have_separate_files() {
    let dir = TempDir::new().unwrap();
    run(&dir, "Ada Lovelace", "1\n1\nmaths\n80\n\n5\n");
    run(&dir, "Grace Hopper", "1\n3\ncobol\n95\n\n5\n");

    let repository = CsvFileRepository::new(dir.path());
    assert_eq!(
        repository.load(&StudentKey::from_name("Ada Lovelace")).unwrap(),
        vec![Mark::new("Maths", 80, 1)]
    );
    assert_eq!(
        repository.load(&StudentKey::from_name("Grace Hopper")).unwrap(),
        vec![Mark::new("Cobol", 95, 3)]
    );
}

#[test]
fn test_corrupt_file_starts_fresh_and_is_replaced_on_add() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("student_marks_Ada.csv");
    std::fs::write(&path, "subject,score,year\nMaths,eighty,1\n").unwrap();

    let (marks, output, _) = run(&dir, "Ada", "2\n\n1\n2\nart\n70\n\n5\n");
    assert_eq!(marks, vec![Mark::new("Art", 70, 2)]);
    assert!(output.contains("No marks found. Try adding some first!"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "subject,score,year\nArt,70,2\n");
}

#[test]
fn test_rejected_input_does_not_touch_file() {
    let dir = TempDir::new().unwrap();
    let (marks, output, _) = run(&dir, "Ada", "1\n4\n\n1\n1\nmaths\n101\n\n5\n");

    assert!(marks.is_empty());
    assert!(output.contains("Invalid year. Please enter 1, 2, 3"));
    assert!(output.contains("Invalid score. Please enter a value between 0 and 100."));
    assert!(!dir.path().join("student_marks_Ada.csv").exists());
}
