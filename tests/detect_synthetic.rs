mod common;

use apriltag_detector::{util::math::Vec2, DetectorConfig};
use common::*;

#[test]
fn pasted_tag_corners() {
    let family = family("tag16h5");
    let detector = detector(&family, 1, DetectorConfig::default());

    for id in [0, 5, 17, 29] {
        let mut canvas = blank(160, 140);
        let cells = tag_cells(&family, id, &[]);
        paste(&mut canvas, &cells, 10, 30, 25);

        let dets = detector.detect(&canvas).unwrap();
        assert_eq!(dets.detections.len(), 1, "id {id}");
        let det = &dets.detections[0];
        assert_eq!(det.id, id);
        assert_eq!(det.hamming, 0);
        assert_corners_close(det, &pasted_corners(&family, 10, 30, 25), 0.5);
    }
}

#[test]
fn perspective_warp_moves_corners() {
    let family = family("tag16h5");
    let detector = detector(&family, 1, DetectorConfig::default());

    let mut canvas = blank(240, 220);
    let cells = tag_cells(&family, 11, &[]);
    let h = warp(&mut canvas, &cells, [
        Vec2::of(52., 40.),
        Vec2::of(190., 58.),
        Vec2::of(176., 181.),
        Vec2::of(44., 168.),
    ]);

    let dets = detector.detect(&canvas).unwrap();
    assert_eq!(dets.detections.len(), 1);
    let det = &dets.detections[0];
    assert_eq!(det.id, 11);
    assert_eq!(det.hamming, 0);
    assert_corners_close(det, &warped_corners(&family, &h), 1.0);
}

#[test]
fn several_tags_in_one_image() {
    let family = family("tag16h5");
    let detector = detector(&family, 1, DetectorConfig::default());

    let mut canvas = blank(300, 120);
    let ids = [2, 9, 21];
    for (i, &id) in ids.iter().enumerate() {
        paste(&mut canvas, &tag_cells(&family, id, &[]), 10, 10 + i * 95, 20);
    }

    let dets = detector.detect(&canvas).unwrap();
    let found = dets.detections.iter().map(|d| d.id).collect::<Vec<_>>();
    // deterministic order sorts by id
    assert_eq!(found, ids);
}

#[test]
fn decimation_keeps_ids() {
    let family = family("tag16h5");
    let mut canvas = blank(220, 200);
    let cells = tag_cells(&family, 4, &[]);
    let h = warp(&mut canvas, &cells, [
        Vec2::of(40., 30.),
        Vec2::of(180., 44.),
        Vec2::of(172., 170.),
        Vec2::of(36., 160.),
    ]);
    let expected = warped_corners(&family, &h);

    for quad_decimate in [1., 1.5, 2.] {
        let config = DetectorConfig { quad_decimate, ..Default::default() };
        let dets = detector(&family, 1, config).detect(&canvas).unwrap();
        assert_eq!(dets.detections.len(), 1, "decimate {quad_decimate}");
        let det = &dets.detections[0];
        assert_eq!(det.id, 4);
        assert_corners_close(det, &expected, quad_decimate as f64);
    }
}

#[test]
fn thread_count_does_not_change_results() {
    let family = family("tag16h5");
    let mut canvas = blank(320, 320);
    for (i, id) in [1, 6, 13, 25].into_iter().enumerate() {
        let (x0, y0) = (20 + (i % 2) * 150, 20 + (i / 2) * 150);
        paste(&mut canvas, &tag_cells(&family, id, &[]), 12, x0, y0);
    }

    let config = DetectorConfig { quad_sigma: 0.8, ..Default::default() };
    let single = detector(&family, 1, DetectorConfig { nthreads: 1, ..config.clone() })
        .detect(&canvas)
        .unwrap();
    let multi = detector(&family, 1, DetectorConfig { nthreads: 4, ..config })
        .detect(&canvas)
        .unwrap();

    assert_eq!(single.detections.len(), 4);
    assert_eq!(single.nquads, multi.nquads);
    assert_eq!(single.detections.len(), multi.detections.len());
    for (a, b) in single.detections.iter().zip(multi.detections.iter()) {
        assert_eq!((a.id, a.hamming), (b.id, b.hamming));
        assert_eq!(a.corners, b.corners);
        assert_eq!(a.decision_margin, b.decision_margin);
    }
}

#[test]
fn blank_image_has_no_detections() {
    let family = family("tag16h5");
    let detector = detector(&family, 2, DetectorConfig::default());
    let dets = detector.detect(&blank(200, 150)).unwrap();
    assert!(dets.detections.is_empty());
}

#[test]
fn reversed_border_families() {
    // white border ring inside a black one; the outer ring carries data
    for (name, ids) in [("tagCircle21h7", [0, 13, 37]), ("tagStandard41h12", [0, 250, 2114])] {
        let family = family(name);
        assert!(family.reversed_border);
        let detector = detector(&family, 1, DetectorConfig::default());

        for id in ids {
            let mut canvas = blank(150, 150);
            paste(&mut canvas, &tag_cells(&family, id, &[]), 10, 30, 30);

            let dets = detector.detect(&canvas).unwrap();
            assert_eq!(dets.detections.len(), 1, "{name} id {id}");
            let det = &dets.detections[0];
            assert_eq!(det.id, id, "{name}");
            assert_eq!(det.hamming, 0);
            assert_corners_close(det, &pasted_corners(&family, 10, 30, 30), 0.5);
        }
    }
}

#[test]
fn reversed_border_with_bit_errors() {
    let family = family("tagCircle21h7");
    let detector = detector(&family, 2, DetectorConfig::default());

    let mut canvas = blank(150, 150);
    // one flip in the outer data ring, one inside the white border
    paste(&mut canvas, &tag_cells(&family, 21, &[0, 20]), 10, 30, 30);

    let dets = detector.detect(&canvas).unwrap();
    assert_eq!(dets.detections.len(), 1);
    assert_eq!(dets.detections[0].id, 21);
    assert_eq!(dets.detections[0].hamming, 2);
}

#[test]
fn tag_beyond_x_32768() {
    let family = family("tag16h5");
    let detector = detector(&family, 1, DetectorConfig::default());

    let mut canvas = blank(33_200, 100);
    paste(&mut canvas, &tag_cells(&family, 6, &[]), 8, 33_050, 18);

    let dets = detector.detect(&canvas).unwrap();
    assert_eq!(dets.detections.len(), 1);
    let det = &dets.detections[0];
    assert_eq!(det.id, 6);
    assert_corners_close(det, &pasted_corners(&family, 8, 33_050, 18), 0.5);
}
