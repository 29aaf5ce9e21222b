use std::{error::Error, fs::{create_dir_all, File}, io::BufWriter, path::{Path, PathBuf}, sync::Arc, time::Duration};

use apriltag_detector::{
    estimate_tag_pose, format_detection,
    util::{image::{pnm::read_pnm_file, ImageRefY8}, ImageY8},
    AprilTagDetectionInfo, AprilTagDetector, AprilTagFamily, DetectionTrace, Detections, TimeProfileStatistics,
};
use clap::{Parser, arg, command};

const HAMM_HIST_MAX: usize = 10;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Log per-stage timing
    #[arg(short, long)]
    debug: bool,
    /// Reduce output
    #[arg(short, long, default_value_t=false)]
    quiet: bool,
    /// Tag family to use
    #[arg(short, long, default_value = "tag16h5")]
    family: Vec<String>,
    /// Repeat processing on input set this many times
    #[arg(short, long, default_value_t=1)]
    iters: usize,
    /// Use this many CPU threads
    #[arg(short, long, default_value_t=1)]
    threads: usize,
    /// Detect tags with up to this many bit errors.
    #[arg(short='a', long, default_value_t=1)]
    hamming: usize,
    /// Decimate input image by this factor
    #[arg(short='x', long, default_value_t=2.0)]
    decimate: f32,
    /// Apply low-pass blur to input; negative sharpens
    #[arg(short, long, default_value_t=0.0)]
    blur: f32,
    /// Spend more time trying to align edges of tags
    #[arg(short, long, default_value_t=true)]
    refine_edges: bool,
    /// Estimate pose for tags of this size (meters)
    #[arg(long)]
    tag_size: Option<f64>,
    /// Focal length for pose estimation (pixels)
    #[arg(long, default_value_t=600.0)]
    focal: f64,
    /// Write intermediate images (PNM) to this directory
    #[arg(long)]
    debug_path: Option<PathBuf>,
    input_files: Vec<PathBuf>,
}

/// Dumps intermediate images as PNM
struct DebugImages {
    dir: PathBuf,
}

impl DebugImages {
    fn write<C: std::ops::Deref<Target = [u8]>>(&self, name: &str, image: &apriltag_detector::util::ImageBuffer<C>) {
        let path = self.dir.join(name);
        let res = File::create(&path)
            .and_then(|f| image.write_pnm(&mut BufWriter::new(f)));
        if let Err(e) = res {
            log::warn!("unable to write {}: {e}", path.display());
        }
    }
}

impl DetectionTrace for DebugImages {
    fn on_preprocess(&self, image: &ImageRefY8) {
        self.write("01_preprocess.pnm", image);
    }

    fn on_threshold(&self, image: &ImageY8) {
        self.write("02_threshold.pnm", image);
    }

    fn on_clusters(&self, cluster_sizes: &[usize]) {
        log::info!("{} clusters", cluster_sizes.len());
    }
}

fn build_detector(args: &Args) -> Result<AprilTagDetector, Box<dyn Error>> {
    let mut builder = AprilTagDetector::builder();

    for family_name in args.family.iter() {
        let Some(family) = AprilTagFamily::for_name(family_name) else {
            eprintln!("Error: Unknown family name: {}", family_name);
            eprintln!("Valid family names:");
            for name in AprilTagFamily::names() {
                eprintln!(" - {name}");
            }
            return Err(format!("unknown family {family_name}").into());
        };

        builder.add_family_bits(family, args.hamming)?;
    }

    builder.config.quad_decimate = args.decimate;
    builder.config.quad_sigma = args.blur;
    builder.config.nthreads = args.threads;
    builder.config.debug = args.debug;
    builder.config.refine_edges = args.refine_edges;

    if let Some(path) = &args.debug_path {
        if !path.exists() {
            create_dir_all(path)?;
        }
        builder.set_trace(Some(Arc::new(DebugImages { dir: path.clone() })));
    }

    Ok(builder.build()?)
}

fn load_image(path: &Path) -> Result<ImageY8, Box<dyn Error>> {
    if let Some(extension) = path.extension() {
        if ["pnm", "pgm", "ppm", "pbm"].iter().any(|ext| extension.eq_ignore_ascii_case(ext)) {
            return Ok(read_pnm_file(path)?);
        }
    }

    let image = image::open(path)?.into_luma8();
    let (width, height) = (image.width() as usize, image.height() as usize);
    Ok(ImageY8::from_buffer(width, height, width, image.into_raw())?)
}

fn draw_detections(mut image: ImageY8, detections: &Detections, path: &Path) -> std::io::Result<()> {
    image.darken();
    image.darken();
    for det in detections.detections.iter() {
        for i in 0..4 {
            image.draw_line(det.corners[i], det.corners[(i + 1) % 4], 255);
        }
    }
    let mut f = BufWriter::new(File::create(path)?);
    image.write_pnm(&mut f)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let detector = build_detector(&args)?;

    let quiet = args.quiet;
    let mut acc = TimeProfileStatistics::default();

    for iter in 0..args.iters {
        let mut total_quads = 0;
        let mut total_hamm_hist = [0usize; HAMM_HIST_MAX];
        let mut total_time = Duration::ZERO;

        if args.iters > 1 {
            println!("iter {} / {}", iter + 1, args.iters);
        }

        for input in args.input_files.iter() {
            let mut hamm_hist = [0u32; HAMM_HIST_MAX];

            if quiet {
                print!("{:20}", input.display());
            } else {
                println!("loading {}", input.display());
            }

            let im = match load_image(input) {
                Ok(image) => image,
                Err(e) => {
                    println!("Error: couldn't load {}", input.display());
                    println!("Cause: {}", e);
                    continue;
                }
            };

            if !quiet {
                println!("image: {} {}x{}", input.display(), im.width(), im.height());
            }

            let detections = detector.detect(&im)?;

            for (i, det) in detections.detections.iter().enumerate() {
                if det.hamming as usize >= HAMM_HIST_MAX {
                    continue;
                }
                hamm_hist[det.hamming as usize] += 1;
                total_hamm_hist[det.hamming as usize] += 1;

                if quiet {
                    continue;
                }
                println!("{}", format_detection(i, det));
                println!("    family {}, hamming {}, margin {:8.3}", det.family.name, det.hamming, det.decision_margin);

                if let Some(tagsize) = args.tag_size {
                    let info = AprilTagDetectionInfo {
                        detection: det,
                        tagsize,
                        fx: args.focal,
                        fy: args.focal,
                        cx: im.width() as f64 / 2.,
                        cy: im.height() as f64 / 2.,
                    };
                    let pose = estimate_tag_pose(&info);
                    println!("    t = [{:.4} {:.4} {:.4}], error {:.3e}", pose.pose.t.x, pose.pose.t.y, pose.pose.t.z, pose.error);
                }
            }

            if !quiet {
                print!("{}", detections.tp);
            }
            acc.add(&detections.tp);

            total_quads += detections.nquads;

            if let Some(dir) = &args.debug_path {
                let out = dir.join("03_detections.pnm");
                if let Err(e) = draw_detections(im, &detections, &out) {
                    log::warn!("unable to write {}: {e}", out.display());
                }
            }

            if !quiet {
                print!("hamm ");
            }

            for v in hamm_hist {
                print!("{:5} ", v);
            }

            let t = detections.tp.total_duration();
            total_time += t;
            print!("{:12.3}s", t.as_secs_f32());
            print!("{:4}", detections.nquads);

            println!();
        }

        println!("Summary");

        print!("hamm ");
        for v in total_hamm_hist {
            print!("{:5} ", v);
        }
        print!("{:12.3} ", total_time.as_secs_f32());
        print!("{:5}", total_quads);
        println!();
    }

    if !quiet && args.iters * args.input_files.len() > 1 {
        println!("{acc}");
    }

    Ok(())
}
