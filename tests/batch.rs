use std::io::Write;

use wordpath::parser::{parse_queries, read_queries};
use wordpath::{CellReuse, QueryRunner, SearchOptions, WordSearchError};

const INPUT: &str = "3 3
C A T
A T C
T C A
CAT ACT

2 2
A B
B A
AB
";

#[test]
fn read_and_run_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(INPUT.as_bytes()).unwrap();

    let queries = read_queries(file.path()).unwrap();
    let outputs = QueryRunner::default().run_batch(&queries).unwrap();

    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs[1].lines, vec![
        "AB (0,0)->(0,1)",
        "AB (0,0)->(1,0)",
        "AB (1,1)->(0,1)",
        "AB (1,1)->(1,0)",
    ]);

    let first = &outputs[0].lines;
    assert!(first.contains(&"CAT (0,0)->(0,1)->(0,2)".to_string()));
    assert!(first.contains(&"CAT (0,0)->(1,0)->(2,0)".to_string()));
    assert!(first.contains(&"ACT (0,1)->(0,0)->(1,1)".to_string()));
    assert!(first.iter().all(|line| line.starts_with("ACT ") || line.starts_with("CAT ")));
    // every ACT line sorts before every CAT line
    let split = first.iter().position(|line| line.starts_with("CAT ")).unwrap();
    assert!(first[..split].iter().all(|line| line.starts_with("ACT ")));
    assert!(first.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn forbidding_reuse_never_adds_lines() {
    let queries = parse_queries(INPUT).unwrap();
    let allow = QueryRunner::default().run_batch(&queries).unwrap();
    let forbid = QueryRunner::new(SearchOptions { cell_reuse: CellReuse::Forbid, ..Default::default() })
        .run_batch(&queries)
        .unwrap();

    for (allowed, forbidden) in allow.iter().zip(&forbid) {
        assert!(forbidden.lines.iter().all(|line| allowed.lines.contains(line)));
    }
    // two-letter words never revisit a cell
    assert_eq!(allow[1], forbid[1]);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(read_queries(dir.path().join("absent.txt")), Err(WordSearchError::Io(_))));
}
