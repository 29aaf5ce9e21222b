mod common;

use apriltag_detector::{
    estimate_tag_pose, estimate_tag_pose_solve_square, AprilTagDetectionInfo, AprilTagPose, DetectorConfig,
};
use common::*;
use nalgebra::Matrix3;

const FOCAL: f64 = 500.;
const TAG_SIZE: f64 = 0.1;
const SCALE: usize = 10;

fn assert_rotation(pose: &AprilTagPose) {
    let r = pose.R;
    let err = (r * r.transpose() - Matrix3::identity()).abs().max();
    assert!(err < 1e-6, "R not orthonormal: {r}");
    assert!((r.determinant() - 1.).abs() < 1e-6, "det(R) = {}", r.determinant());
}

#[test]
fn fronto_parallel_distance() {
    let family = family("tag16h5");
    let detector = detector(&family, 1, DetectorConfig::default());

    let (width, height) = (200, 200);
    let mut canvas = blank(width, height);
    // centered: the tag's 6-cell border spans pixels 70..130
    paste(&mut canvas, &tag_cells(&family, 14, &[]), SCALE, 60, 60);

    let dets = detector.detect(&canvas).unwrap();
    assert_eq!(dets.detections.len(), 1);
    let det = &dets.detections[0];

    let info = AprilTagDetectionInfo {
        detection: det,
        tagsize: TAG_SIZE,
        fx: FOCAL,
        fy: FOCAL,
        cx: width as f64 / 2.,
        cy: height as f64 / 2.,
    };
    // a tag 60px wide at f=500 sits at 500 * 0.1 / 60
    let expected_z = FOCAL * TAG_SIZE / (family.width_at_border as f64 * SCALE as f64);

    let best = estimate_tag_pose(&info);
    assert!((best.pose.t.z - expected_z).abs() / expected_z < 0.03, "t = {}", best.pose.t);
    assert!(best.pose.t.x.abs() < 0.01 && best.pose.t.y.abs() < 0.01, "t = {}", best.pose.t);
    assert_rotation(&best.pose);

    let square = estimate_tag_pose_solve_square(&info);
    assert!((square.pose.t.z - expected_z).abs() / expected_z < 0.03, "t = {}", square.pose.t);
    assert_rotation(&square.pose);
}

#[test]
fn tilted_tag_pose_is_a_rotation() {
    use apriltag_detector::util::math::Vec2;
    use nalgebra::{Rotation3, Vector3};

    let family = family("tag16h5");
    let detector = detector(&family, 1, DetectorConfig::default());
    let (width, height) = (320, 320);
    let (cx, cy) = (width as f64 / 2., height as f64 / 2.);

    let poses = [
        ((0.3, -0.4, 0.2), Vector3::new(0., 0., 0.45)),
        ((-0.35, 0.2, 0.9), Vector3::new(0.02, -0.01, 0.5)),
    ];
    for ((roll, pitch, yaw), t) in poses {
        let r = Rotation3::from_euler_angles(roll, pitch, yaw).into_inner();

        // grid cells to tag-frame meters, then through the camera
        let tw = family.total_width as f64;
        let cell = TAG_SIZE / family.width_at_border as f64;
        let project = |gx: f64, gy: f64| {
            let c = r * Vector3::new((gx - tw / 2.) * cell, (gy - tw / 2.) * cell, 0.) + t;
            Vec2::of(FOCAL * c.x / c.z + cx, FOCAL * c.y / c.z + cy)
        };

        let mut canvas = blank(width, height);
        warp(&mut canvas, &tag_cells(&family, 9, &[]), [
            project(0., 0.),
            project(tw, 0.),
            project(tw, tw),
            project(0., tw),
        ]);

        let dets = detector.detect(&canvas).unwrap();
        assert_eq!(dets.detections.len(), 1, "{roll} {pitch} {yaw}");
        let info = AprilTagDetectionInfo {
            detection: &dets.detections[0],
            tagsize: TAG_SIZE,
            fx: FOCAL,
            fy: FOCAL,
            cx,
            cy,
        };
        let best = estimate_tag_pose(&info);
        assert_rotation(&best.pose);
        assert!((best.pose.R - r).abs().max() < 0.05, "{roll} {pitch} {yaw}: {}", best.pose.R);
        assert!((best.pose.t - t).norm() < 0.01, "t = {}", best.pose.t);
    }
}
