use tempfile::TempDir;

use adiflog::{
    EncodeConfig, Record, decode,
    logbook::{LogbookError, RecordStore, sqlite::SqliteLogbook},
};

fn rec(pairs: &[(&str, &str)]) -> Record {
    pairs.iter().copied().collect()
}

fn contact(call: &str, time: &str) -> Record {
    rec(&[
        ("CALL", call),
        ("QSO_DATE", "20130312"),
        ("TIME_ON", time),
        ("FREQ", "145.750"),
        ("BAND", "2m"),
        ("MODE", "FM"),
    ])
}

#[test]
fn add_get_edit_delete() {
    let mut book = SqliteLogbook::open_in_memory("test").expect("open");
    let id1 = book.add_record(&contact("TEST123", "0101")).expect("add1");
    let id2 = book.add_record(&contact("TEST456", "0202")).expect("add2");
    assert_ne!(id1, id2);
    assert_eq!(book.record_count().expect("count"), 2);

    let got = book.record_by_id(id1).expect("get").expect("present");
    assert_eq!(got.id, id1);
    assert_eq!(got.record, contact("TEST123", "0101"));

    book.edit_record(id1, "call", "W1AW").expect("edit");
    book.edit_record(id1, "MODE", "").expect("clear");
    let edited = book.record_by_id(id1).expect("get").expect("present");
    assert_eq!(edited.record.get("CALL"), Some("W1AW"));
    assert_eq!(edited.record.get("MODE"), None);

    book.delete_record(id2).expect("delete");
    assert_eq!(book.record_count().expect("count"), 1);
    assert!(book.record_by_id(id2).expect("get").is_none());
}

#[test]
fn bad_edits_and_missing_rows_are_reported() {
    let mut book = SqliteLogbook::open_in_memory("test").expect("open");
    let id = book.add_record(&contact("K1ABC", "1200")).expect("add");

    assert!(matches!(
        book.edit_record(id, "GRIDSQUARE", "FN42"),
        Err(LogbookError::UnknownField(_))
    ));
    assert!(matches!(
        book.edit_record(id, "QSO_DATE", "20130229"),
        Err(LogbookError::InvalidValue { .. })
    ));
    assert!(matches!(
        book.edit_record(id + 100, "CALL", "K2ABC"),
        Err(LogbookError::MissingRecord(_))
    ));
    assert!(matches!(
        book.delete_record(id + 100),
        Err(LogbookError::MissingRecord(_))
    ));
    assert!(matches!(
        SqliteLogbook::open_in_memory("bad name"),
        Err(LogbookError::InvalidLogName(_))
    ));
}

#[test]
fn unregistered_fields_are_not_stored() {
    let mut book = SqliteLogbook::open_in_memory("test").expect("open");
    let mut record = contact("K1ABC", "1200");
    record.insert("GRIDSQUARE", "FN42");
    record.insert("id", "99");
    let id = book.add_record(&record).expect("add");

    let stored = book.record_by_id(id).expect("get").expect("present");
    assert_eq!(stored.record, contact("K1ABC", "1200"));
}

#[test]
fn records_survive_reopen() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("logbook.db");

    let ids = {
        let mut book = SqliteLogbook::open(&db_path, "repeater_contacts").expect("open");
        book.add_records(&[contact("M0ABC", "0900"), contact("M0DEF", "0915")])
            .expect("add")
    };

    let book = SqliteLogbook::open(&db_path, "repeater_contacts").expect("reopen");
    let all = book.all_records().expect("all");
    assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), ids);
    assert_eq!(all[0].record, contact("M0ABC", "0900"));
    assert_eq!(all[1].record, contact("M0DEF", "0915"));
}

#[test]
fn import_then_export_round_trips_without_ids() {
    let text = "Imported<eoh>
<call:4>TEST<band:3>40m<mode:2>CW<qso_date:8:d>20130322<time_on:4>1955<eor>
<call:5>K1ABC<freq:6>14.025<notes:9>QRP 5W ok<eor>
";
    let mut book = SqliteLogbook::open_in_memory("imports").expect("open");
    let ids = book.import_adif(text).expect("import");
    assert_eq!(ids.len(), 2);

    let exported = book.export_adif(&EncodeConfig::default()).expect("export");
    assert!(!exported.contains("<id:"));
    assert_eq!(
        decode(&exported).expect("decode").records,
        decode(text).expect("decode").records
    );
}

#[test]
fn importing_corrupted_text_stores_nothing() {
    let mut book = SqliteLogbook::open_in_memory("imports").expect("open");
    let err = book
        .import_adif("<eoh><call:4>AAAA<eoh><call:4>BBBB<eor>")
        .expect_err("corrupted");
    assert!(matches!(err, LogbookError::Adif(_)));
    assert_eq!(book.record_count().expect("count"), 0);
}

#[test]
fn sql_keywords_work_as_log_names() {
    for name in ["order", "select", "table"] {
        let mut book = SqliteLogbook::open_in_memory(name).expect("open");
        let id = book.add_record(&contact("K1ABC", "1200")).expect("add");
        book.edit_record(id, "MODE", "CW").expect("edit");
        assert_eq!(book.record_count().expect("count"), 1);
        let all = book.all_records().expect("all");
        assert_eq!(all[0].record.get("MODE"), Some("CW"));
        book.delete_record(id).expect("delete");
        assert!(book.record_by_id(id).expect("get").is_none());
    }
}
