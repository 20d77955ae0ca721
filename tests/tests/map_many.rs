use pretty_assertions::assert_eq;
use rowmap::{nullable::Int4, Mapper, Record};
use tests::assert_empty;

#[derive(rowmap::Row)]
struct ScoreRow {
    player: String,
    points: Int4,
}

#[derive(Debug, PartialEq, rowmap::Model)]
struct Score {
    player: String,
    points: Option<i32>,
}

fn score(player: &str, points: Option<i32>) -> Score {
    Score {
        player: player.to_string(),
        points,
    }
}

#[test]
fn preserves_length_and_order() {
    let rows = vec![
        ScoreRow {
            player: "c".to_string(),
            points: Int4::new(3),
        },
        ScoreRow {
            player: "a".to_string(),
            points: Int4::null(),
        },
        ScoreRow {
            player: "b".to_string(),
            points: Int4::new(1),
        },
    ];

    let scores: Vec<Score> = rowmap::map_many(&rows).unwrap();

    assert_eq!(
        scores,
        [score("c", Some(3)), score("a", None), score("b", Some(1))]
    );
}

#[test]
fn empty_input_maps_to_empty_output() {
    let scores: Vec<Score> = rowmap::map_many(Vec::<ScoreRow>::new()).unwrap();
    assert_empty!(scores);
}

#[test]
fn same_as_mapping_each_row() {
    let rows = [
        ScoreRow {
            player: "x".to_string(),
            points: Int4::new(10),
        },
        ScoreRow {
            player: "y".to_string(),
            points: Int4::null(),
        },
    ];

    let many: Vec<Score> = rowmap::map_many(&rows).unwrap();
    let one_by_one = rows
        .iter()
        .map(|row| rowmap::map_one(row).unwrap())
        .collect::<Vec<Score>>();

    assert_eq!(many, one_by_one);
}

#[test]
fn stops_at_first_failing_row() {
    let strict = Mapper::builder().strict(true).build();

    let records = vec![
        Record::new().with("player", "ok"),
        Record::new().with("player", "bad").with("points", 7i64),
        Record::new().with("player", 1i32),
    ];

    let err = strict.map_many::<Score>(records).unwrap_err();

    assert!(err.root().is_incompatible_field());
    assert_eq!(
        err.to_string(),
        "row 1: incompatible field Score.points: cannot map I64 into Option<i32>"
    );
}
