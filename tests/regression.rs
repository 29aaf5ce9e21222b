//! Replays `tests/data/<family>_<name>.jpg` against the reference
//! detections in the matching `.txt` file.
//!
//! Reference lines use the [format_detection] layout. Ids and order must
//! match exactly; corners may drift by [CORNER_TOLERANCE] pixels, since the
//! references hold the rendered corner positions and the images went
//! through lossy JPEG.

use std::{
    fs,
    path::{Path, PathBuf},
};

use apriltag_detector::{
    compare_corners, format_detection, util::ImageY8, AprilTagFamily, DetectorBuilder, DetectorConfig,
};

const DEFAULT_FAMILY: &str = "tag36h11";
const CORNER_TOLERANCE: f64 = 1.0;

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn fixtures() -> Vec<(PathBuf, PathBuf)> {
    let entries = fs::read_dir(data_dir()).unwrap_or_else(|e| panic!("{}: {e}", data_dir().display()));
    let mut pairs = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("jpg")))
        .filter_map(|image| {
            let reference = image.with_extension("txt");
            reference.exists().then_some((image, reference))
        })
        .collect::<Vec<_>>();
    pairs.sort();
    pairs
}

fn family_for(image: &Path) -> &str {
    image
        .file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.split_once('_'))
        .map(|(prefix, _)| prefix)
        .filter(|prefix| prefix.starts_with("tag"))
        .unwrap_or(DEFAULT_FAMILY)
}

fn load(path: &Path) -> ImageY8 {
    let image = image::open(path).unwrap().into_luma8();
    let (width, height) = (image.width() as usize, image.height() as usize);
    ImageY8::from_buffer(width, height, width, image.into_raw()).unwrap()
}

/// `index, id, (x y), (x y), (x y), (x y)`
fn parse_line(line: &str) -> (usize, usize, Vec<(f64, f64)>) {
    let (head, rest) = line.split_once(", (").unwrap_or_else(|| panic!("bad line {line:?}"));
    let (index, id) = head.split_once(", ").unwrap_or_else(|| panic!("bad line {line:?}"));
    let corners = format!("({rest}")
        .split(", ")
        .map(|p| {
            let (x, y) = p.trim_matches(|c| c == '(' || c == ')').split_once(' ').unwrap();
            (x.parse().unwrap(), y.parse().unwrap())
        })
        .collect();
    (index.parse().unwrap(), id.parse().unwrap(), corners)
}

#[test]
fn line_layout_parses() {
    let (index, id, corners) = parse_line("3, 211, (294.4091 358.5894), (379.7435 343.1042), (363.9612 259.4577), (280.5450 271.1053)");
    assert_eq!((index, id), (3, 211));
    assert_eq!(corners.len(), 4);
    assert_eq!(corners[3], (280.545, 271.1053));
}

#[test]
fn reference_detections() {
    let _ = env_logger::builder().is_test(true).try_init();

    let pairs = fixtures();
    assert!(!pairs.is_empty(), "no .jpg/.txt fixture pairs in {}", data_dir().display());

    for (image_path, reference_path) in pairs {
        let family_name = family_for(&image_path);
        let family = AprilTagFamily::for_name(family_name)
            .unwrap_or_else(|| panic!("{}: family {family_name} is not bundled", image_path.display()));

        let detector = DetectorBuilder::new(DetectorConfig::default())
            .with_family(family, 2)
            .unwrap()
            .build()
            .unwrap();

        let image = load(&image_path);
        let mut detections = detector.detect(&image).unwrap().detections;
        detections.sort_by(compare_corners);

        let actual = detections
            .iter()
            .enumerate()
            .map(|(i, det)| format_detection(i, det))
            .collect::<Vec<_>>();
        log::info!("{}:\n{}", image_path.display(), actual.join("\n"));

        let reference = fs::read_to_string(&reference_path).unwrap();
        let expected = reference
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();

        assert_eq!(actual.len(), expected.len(), "{}: {actual:#?}", image_path.display());
        for (got, want) in actual.iter().zip(&expected) {
            let (gi, gid, gc) = parse_line(got);
            let (wi, wid, wc) = parse_line(want);
            assert_eq!((gi, gid), (wi, wid), "{}: {got} vs {want}", image_path.display());
            for ((gx, gy), (wx, wy)) in gc.iter().zip(&wc) {
                let err = (gx - wx).hypot(gy - wy);
                assert!(err < CORNER_TOLERANCE, "{}: {got} vs {want}", image_path.display());
            }
        }
    }
}
