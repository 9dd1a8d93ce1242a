mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{write_test_png, ScriptedDialogs};
use watermark_core::config::WatermarkConfig;
use watermark_core::consts::CANVAS_SIZE;
use watermark_core::dialog::ConfirmOutcome;
use watermark_core::io::image_io::load_fitted;
use watermark_core::palette::{FontFamily, HexColor, TextColor};
use watermark_core::session::{Screen, Session, SAVED_MESSAGE, SAVED_TITLE};
use watermark_core::watermark::WatermarkSpec;

fn assert_landing(session: &Session) {
    assert_eq!(session.screen(), Screen::Landing);
    assert!(session.image_path().is_none());
    assert!(session.preview().is_none());
    assert!(session.watermark().is_none());
    assert!(!session.is_dialog_open());
    assert_eq!(session.watermark_text(), "");
    assert_eq!(session.text_color(), HexColor::BLACK);
    assert_eq!(session.font_size(), 30);
    assert_eq!(session.font_family(), FontFamily::Arial);
}

fn red_spec(text: &str) -> WatermarkSpec {
    WatermarkSpec::new(text, TextColor::Red.hex(), 40, FontFamily::Arial).unwrap()
}

#[test]
fn test_new_session_is_landing() {
    assert_landing(&Session::new(WatermarkConfig::default()));
}

#[test]
fn test_cancelled_picker_keeps_state() {
    let mut session = Session::new(WatermarkConfig::default());
    let mut dialogs = ScriptedDialogs::opening(None);
    assert!(!session.select_file(&mut dialogs).unwrap());
    assert_eq!(dialogs.image_requests, 1);
    assert_landing(&session);
    assert!(dialogs.infos.is_empty());
}

#[test]
fn test_select_file_enters_editing_with_fitted_preview() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_test_png(dir.path(), "in.png", 120, 80, [10, 200, 30, 255]);
    let mut session = Session::new(WatermarkConfig::default());

    assert!(session.select_file(&mut ScriptedDialogs::opening(Some(path.clone()))).unwrap());

    assert_eq!(session.screen(), Screen::Editing);
    assert_eq!(session.image_path(), Some(path.as_path()));
    let preview = session.preview().unwrap();
    assert_eq!(preview.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
    assert_eq!(session.watermark_text(), "");
}

#[test]
fn test_select_file_ignored_while_editing() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_test_png(dir.path(), "a.png", 10, 10, [0, 0, 0, 255]);
    let second = write_test_png(dir.path(), "b.png", 10, 10, [255, 255, 255, 255]);
    let mut session = Session::new(WatermarkConfig::default());
    session.select_file(&mut ScriptedDialogs::opening(Some(first.clone()))).unwrap();

    let mut dialogs = ScriptedDialogs::opening(Some(second));
    assert!(!session.select_file(&mut dialogs).unwrap());
    assert_eq!(dialogs.image_requests, 0);
    assert_eq!(session.image_path(), Some(first.as_path()));
}

#[test]
fn test_unreadable_image_stays_on_landing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not a png").unwrap();
    let mut session = Session::new(WatermarkConfig::default());

    assert!(session.select_file(&mut ScriptedDialogs::opening(Some(path))).is_err());
    assert_landing(&session);
}

#[test]
fn test_return_restores_landing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_test_png(dir.path(), "in.png", 32, 32, [1, 2, 3, 255]);
    let mut session = Session::new(WatermarkConfig::default());
    session.select_file(&mut ScriptedDialogs::opening(Some(path))).unwrap();
    session.apply_watermark(red_spec("mark"));
    session.open_text_dialog(|_| {});

    session.return_to_main();

    assert_landing(&session);
    assert_eq!(session.config(), &WatermarkConfig::default());
}

#[test]
fn test_return_keeps_config() {
    let config = WatermarkConfig {
        font_path: "custom.ttf".into(),
        ..Default::default()
    };
    let mut session = Session::new(config.clone());
    session.return_to_main();
    assert_eq!(session.config(), &config);
}

#[test]
fn test_second_dialog_is_noop() {
    let mut session = Session::new(WatermarkConfig::default());
    let hits = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&hits);
    assert!(session.open_text_dialog(move |spec| first.borrow_mut().push(("first", spec))));
    let second = Rc::clone(&hits);
    assert!(!session.open_text_dialog(move |spec| second.borrow_mut().push(("second", spec))));

    let dialog = session.dialog_mut().unwrap();
    dialog.form.text = "x".into();
    dialog.form.color = Some(TextColor::White);
    dialog.form.font_size = Some(30);
    dialog.form.font_family = Some(FontFamily::Impact);
    assert_eq!(session.confirm_dialog(), Some(ConfirmOutcome::Applied));

    let hits = hits.borrow();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, "first");
}

#[test]
fn test_closed_dialog_can_be_reopened() {
    let mut session = Session::new(WatermarkConfig::default());
    assert!(session.open_text_dialog(|_| {}));
    session.close_dialog();
    assert!(!session.is_dialog_open());
    assert!(session.open_text_dialog(|_| {}));
}

#[test]
fn test_incomplete_confirm_keeps_dialog_open() {
    let mut session = Session::new(WatermarkConfig::default());
    session.open_text_dialog(|_| panic!("callback must not fire"));
    assert!(matches!(session.confirm_dialog(), Some(ConfirmOutcome::Missing(_))));
    assert!(session.is_dialog_open());
}

#[test]
fn test_confirm_without_dialog() {
    let mut session = Session::new(WatermarkConfig::default());
    assert_eq!(session.confirm_dialog(), None);
}

#[test]
fn test_dialog_callback_feeds_apply() {
    let mut session = Session::new(WatermarkConfig::default());
    let (tx, rx) = std::sync::mpsc::channel();
    session.open_text_dialog(move |spec| {
        let _ = tx.send(spec);
    });
    let dialog = session.dialog_mut().unwrap();
    dialog.form.text = "© 2024".into();
    dialog.form.color = Some(TextColor::Yellow);
    dialog.form.font_size = Some(55);
    dialog.form.font_family = Some(FontFamily::Georgia);
    session.confirm_dialog();

    for spec in rx.try_iter() {
        session.apply_watermark(spec);
    }

    assert!(!session.is_dialog_open());
    assert_eq!(session.watermark_text(), "© 2024");
    assert_eq!(session.text_color().to_string(), "#e8ff00");
    assert_eq!(session.font_size(), 55);
    assert_eq!(session.font_family(), FontFamily::Georgia);
}

#[test]
fn test_later_confirmation_supersedes() {
    let mut session = Session::new(WatermarkConfig::default());
    session.apply_watermark(red_spec("one"));
    session.apply_watermark(red_spec("two"));
    assert_eq!(session.watermark_text(), "two");
}

#[test]
fn test_save_without_image_is_error() {
    let mut session = Session::new(WatermarkConfig::default());
    let mut dialogs = ScriptedDialogs::default().saving_to(None);
    assert!(session.save(&mut dialogs).is_err());
}

#[test]
fn test_save_cancelled_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_test_png(dir.path(), "in.png", 16, 16, [0, 0, 0, 255]);
    let mut session = Session::new(WatermarkConfig::default());
    session.select_file(&mut ScriptedDialogs::opening(Some(path))).unwrap();

    let mut dialogs = ScriptedDialogs::default().saving_to(None);
    assert_eq!(session.save(&mut dialogs).unwrap(), None);
    assert!(dialogs.infos.is_empty());
    assert_eq!(session.screen(), Screen::Editing);
}

#[test]
fn test_save_without_watermark_is_unchanged_image() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_test_png(dir.path(), "in.png", 64, 48, [90, 60, 30, 255]);
    let out = dir.path().join("out.png");
    let mut session = Session::new(WatermarkConfig::default());
    session.select_file(&mut ScriptedDialogs::opening(Some(source.clone()))).unwrap();

    let mut dialogs = ScriptedDialogs::default().saving_to(Some(out.clone()));
    let written = session.save(&mut dialogs).unwrap().unwrap();

    assert!(written.is_absolute());
    let saved = image::open(&out).unwrap().to_rgba8();
    assert_eq!(saved, load_fitted(&source, CANVAS_SIZE).unwrap());
    assert_eq!(
        dialogs.infos,
        vec![(SAVED_TITLE.to_string(), SAVED_MESSAGE.to_string())]
    );
}

#[test]
fn test_save_without_extension_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_test_png(dir.path(), "in.png", 32, 32, [10, 20, 30, 255]);
    let mut session = Session::new(WatermarkConfig::default());
    session.select_file(&mut ScriptedDialogs::opening(Some(source.clone()))).unwrap();

    let mut dialogs = ScriptedDialogs::default().saving_to(Some(dir.path().join("out")));
    let written = session.save(&mut dialogs).unwrap().unwrap();

    assert!(written.ends_with("out.png"), "{}", written.display());
    assert!(!dir.path().join("out").exists());
    let saved = image::open(dir.path().join("out.png")).unwrap().to_rgba8();
    assert_eq!(saved, load_fitted(&source, CANVAS_SIZE).unwrap());
}

#[test]
fn test_save_with_missing_font_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_test_png(dir.path(), "in.png", 600, 600, [0, 0, 0, 255]);
    let out = dir.path().join("out.png");
    let config = WatermarkConfig {
        font_path: dir.path().join("no_such_font.ttf"),
        ..Default::default()
    };
    let mut session = Session::new(config);
    session.select_file(&mut ScriptedDialogs::opening(Some(source.clone()))).unwrap();
    session.apply_watermark(
        WatermarkSpec::new("Sample", TextColor::White.hex(), 40, FontFamily::Arial).unwrap(),
    );

    let mut dialogs = ScriptedDialogs::default().saving_to(Some(out.clone()));
    assert!(session.save(&mut dialogs).unwrap().is_some());

    let saved = image::open(&out).unwrap().to_rgba8();
    assert_ne!(saved, load_fitted(&source, CANVAS_SIZE).unwrap());
    assert_eq!(dialogs.infos.len(), 1);
}

#[test]
fn test_save_keeps_editing_state() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_test_png(dir.path(), "in.png", 20, 20, [0, 0, 0, 255]);
    let mut session = Session::new(WatermarkConfig::default());
    session.select_file(&mut ScriptedDialogs::opening(Some(source))).unwrap();
    session.apply_watermark(red_spec("keep"));

    let mut dialogs = ScriptedDialogs::default()
        .saving_to(Some(dir.path().join("a.png")))
        .saving_to(Some(dir.path().join("b.png")));
    session.save(&mut dialogs).unwrap();
    session.save(&mut dialogs).unwrap();

    assert_eq!(session.screen(), Screen::Editing);
    assert_eq!(session.watermark_text(), "keep");
    assert!(dir.path().join("a.png").exists());
    assert!(dir.path().join("b.png").exists());
}
