//! Round-trip tests over a realistic pbxproj document.

use jettison_pbx::{Value, from_str, to_string};
use pretty_assertions::assert_eq;

const SAMPLE: &str = r#"// !$*UTF8*$!
{
	archiveVersion = 1;
	classes = {
	};
	objectVersion = 50;
	objects = {
		24BC71E01F2A3B4C5D6E7F80 /* Foo.framework */ = {
			isa = PBXFileReference;
			lastKnownFileType = wrapper.framework;
			name = "Foo.framework";
			path = Carthage/Build/iOS/Foo.framework;
			sourceTree = "<group>";
		};
		24BC71E01F2A3B4C5D6E7F81 = {
			isa = PBXShellScriptBuildPhase;
			name = "Copy Carthage Frameworks";
			inputPaths = (
				"$(SRCROOT)/Carthage/Build/iOS/Foo.framework",
			);
			shellScript = "/usr/local/bin/carthage copy-frameworks\n";
		};
	};
	rootObject = 24BC71E01F2A3B4C5D6E7F82;
}
"#;

#[test]
fn parse_then_serialize_then_parse_is_stable() {
    let first = from_str(SAMPLE).unwrap();
    let text = to_string(&first);
    let second = from_str(&text).unwrap();

    assert_eq!(second, first);
}

#[test]
fn serialization_is_a_fixed_point_after_one_pass() {
    // One serialize normalizes layout; after that the text is stable.
    let tree = from_str(SAMPLE).unwrap();
    let once = to_string(&tree);
    let twice = to_string(&from_str(&once).unwrap());

    assert_eq!(once, twice);
}

#[test]
fn inline_annotations_are_comments_only() {
    let tree = from_str(SAMPLE).unwrap();
    let objects = tree.as_dict().unwrap().get("objects").unwrap();

    // The `/* Foo.framework */` annotation belongs to no key or value
    let file_ref = objects
        .as_dict()
        .unwrap()
        .get("24BC71E01F2A3B4C5D6E7F80")
        .unwrap();
    assert_eq!(
        file_ref.as_dict().unwrap().get_str("name"),
        Some("Foo.framework")
    );
}

#[test]
fn escaped_shell_script_survives() {
    let tree = from_str(SAMPLE).unwrap();
    let objects = tree.as_dict().unwrap().get("objects").unwrap();
    let phase = objects
        .as_dict()
        .unwrap()
        .get("24BC71E01F2A3B4C5D6E7F81")
        .unwrap();

    assert_eq!(
        phase.as_dict().unwrap().get_str("shellScript"),
        Some("/usr/local/bin/carthage copy-frameworks\n")
    );

    let reparsed = from_str(&to_string(&tree)).unwrap();
    assert_eq!(reparsed, tree);
}

#[test]
fn key_order_is_preserved_through_roundtrip() {
    let tree = from_str(SAMPLE).unwrap();
    let keys: Vec<&str> = tree.as_dict().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec![
            "archiveVersion",
            "classes",
            "objectVersion",
            "objects",
            "rootObject"
        ]
    );

    let reparsed = from_str(&to_string(&tree)).unwrap();
    let keys_after: Vec<&str> = reparsed.as_dict().unwrap().keys().collect();
    assert_eq!(keys_after, keys);
}

#[test]
fn value_display_renders_compact_fragment() {
    let tree = from_str("{ files = ( AAAA, BBBB, ); }").unwrap();
    let rendered = tree.to_string();

    assert_eq!(rendered, "{files = (AAAA, BBBB);}");
}

#[test]
fn data_literals_roundtrip() {
    let tree = from_str("{ payload = <0fee dd00>; }").unwrap();
    assert_eq!(
        tree.as_dict().unwrap().get("payload"),
        Some(&Value::Data(vec![0x0f, 0xee, 0xdd, 0x00]))
    );

    let reparsed = from_str(&to_string(&tree)).unwrap();
    assert_eq!(reparsed, tree);
}
