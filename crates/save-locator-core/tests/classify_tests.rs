mod common;

use common::{make_dir, scratch_dir, touch};
use save_locator_core::analysis::classify::{has_save_files, is_mismatched_sequel, MAX_PATH_DEPTH};
use save_locator_core::analysis::{classify, is_valid_save_location, Verdict};
use save_locator_core::platform::path_depth;
use save_locator_core::ApplicationIdentity;

fn identity(name: &str) -> ApplicationIdentity {
    ApplicationIdentity::new(367520, name, Vec::new())
}

#[test]
fn test_directory_with_save_file_is_valid() {
    let tmp = scratch_dir();
    let dir = make_dir(&tmp.path().join("Documents/Hollow Knight"));
    touch(&dir.join("user1.SAV"));

    assert!(has_save_files(&dir));
    assert!(is_valid_save_location(&dir, &identity("Hollow Knight")));
    assert_eq!(classify(&dir, &identity("Hollow Knight")), Verdict::Accepted);
}

#[test]
fn test_directory_without_save_files_is_rejected() {
    let tmp = scratch_dir();
    let dir = make_dir(&tmp.path().join("Documents/Hollow Knight"));
    touch(&dir.join("readme.txt"));
    make_dir(&dir.join("nested.sav"));

    assert!(!has_save_files(&dir));
    assert!(!is_valid_save_location(&dir, &identity("Hollow Knight")));
}

#[test]
fn test_program_files_rejected_even_with_saves() {
    let tmp = scratch_dir();
    let dir = make_dir(&tmp.path().join("Program Files/Hollow Knight"));
    touch(&dir.join("user1.sav"));

    assert!(!is_valid_save_location(&dir, &identity("Hollow Knight")));
}

#[test]
fn test_depth_eleven_rejected_even_when_matching() {
    let tmp = scratch_dir();
    let mut dir = tmp.path().join("Hollow Knight");
    while path_depth(&dir) < MAX_PATH_DEPTH + 1 {
        dir.push("saves");
    }
    make_dir(&dir);
    touch(&dir.join("user1.sav"));
    assert!(path_depth(&dir) > MAX_PATH_DEPTH);

    assert!(has_save_files(&dir));
    assert!(!is_valid_save_location(&dir, &identity("Hollow Knight")));

    // One level up is within the limit and holds a save file of its own.
    let parent = dir.parent().unwrap().to_path_buf();
    touch(&parent.join("user2.sav"));
    if path_depth(&parent) == MAX_PATH_DEPTH {
        assert!(is_valid_save_location(&parent, &identity("Hollow Knight")));
    }
}

#[test]
fn test_valid_parent_suppresses_valid_child() {
    let tmp = scratch_dir();
    let saves = make_dir(&tmp.path().join("Documents/Game/Saves"));
    touch(&saves.join("slot.sav"));
    let profile = make_dir(&saves.join("Profile"));
    touch(&profile.join("profile.dat"));

    let game = identity("Game");
    assert!(is_valid_save_location(&profile, &game));
    assert!(is_valid_save_location(&saves, &game));
    assert_eq!(classify(&profile, &game), Verdict::SuppressedByParent);
    assert_eq!(classify(&saves, &game), Verdict::Accepted);
}

#[test]
fn test_numbered_profile_rejected_as_sequel() {
    let tmp = scratch_dir();
    let saves = make_dir(&tmp.path().join("Documents/Game/Saves"));
    touch(&saves.join("slot.sav"));
    let profile = make_dir(&saves.join("Profile1"));
    touch(&profile.join("profile.dat"));

    let game = identity("Game");
    // The digit after the name reads as a sequel number, so the child is
    // rejected outright before any parent comparison.
    let profile_lower = profile.to_string_lossy().to_lowercase();
    assert!(is_mismatched_sequel(&profile_lower, &game));
    assert_eq!(classify(&profile, &game), Verdict::Rejected);
    assert_eq!(classify(&saves, &game), Verdict::Accepted);
}

#[test]
fn test_numbered_slot_child_suppressed_by_slot() {
    let tmp = scratch_dir();
    let game_dir = make_dir(&tmp.path().join("Documents/Game 1"));
    let slot = make_dir(&game_dir.join(".1"));
    touch(&slot.join("meta.dat"));
    let inner = make_dir(&slot.join("Slot"));
    touch(&inner.join("state.dat"));

    let game = identity("Game 1");
    assert!(!is_valid_save_location(&game_dir, &game));
    assert!(is_valid_save_location(&inner, &game));
    assert_eq!(classify(&slot, &game), Verdict::Accepted);
    assert_eq!(classify(&inner, &game), Verdict::SuppressedByParent);
}

#[test]
fn test_punctuated_names_found() {
    let tmp = scratch_dir();
    let mut names = vec!["Baldur's Gate 3", "Don't Starve", "Dr. Langeskov"];
    if cfg!(unix) {
        names.push("NieR:Automata");
    }
    for name in names {
        let dir = make_dir(&tmp.path().join("Documents").join(name));
        touch(&dir.join("profile.sav"));
        assert!(
            is_valid_save_location(&dir, &identity(name)),
            "{} not accepted",
            name
        );
    }
}

#[test]
fn test_suppression_looks_one_level_only() {
    let tmp = scratch_dir();
    let top = make_dir(&tmp.path().join("Documents/Game"));
    touch(&top.join("a.sav"));
    let middle = make_dir(&top.join("Saves"));
    touch(&middle.join("b.sav"));
    let leaf = make_dir(&middle.join("Slots"));
    touch(&leaf.join("c.sav"));

    let game = identity("Game");
    // Middle is valid but its parent is too.
    assert_eq!(classify(&middle, &game), Verdict::SuppressedByParent);
    // Leaf only compares against middle's own validity.
    assert_eq!(classify(&leaf, &game), Verdict::SuppressedByParent);
    assert_eq!(classify(&top, &game), Verdict::Accepted);
}

#[test]
fn test_sequel_folder_rejected_for_first_game() {
    let tmp = scratch_dir();
    let sequel = make_dir(&tmp.path().join("Documents/Hollow Knight 2"));
    touch(&sequel.join("user1.sav"));

    assert!(!is_valid_save_location(&sequel, &identity("Hollow Knight")));
    assert!(is_valid_save_location(&sequel, &identity("Hollow Knight 2")));
    assert!(!is_valid_save_location(&sequel, &identity("Hollow Knight 3")));
}
