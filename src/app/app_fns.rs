use std::{error::Error, path::PathBuf};

use crate::{app::*, library};

pub fn run_app() -> i32 {
    //clap terminates the process itself if the arguments are malformed.
    let cfg = arg_parse::parse_args();
    configure_logs();

    match run_app_inner(&cfg) {
        Ok(dest_path) => {
            println!("Wrote strip image to {}", dest_path.display());
            0
        }
        Err(fatal_error) => {
            print_fatal_err(&fatal_error);
            1
        }
    }
}

fn run_app_inner(cfg: &AppCfg) -> Result<PathBuf, AppError> {
    //The strip image lands next to the source directory, never inside it,
    //so that a rerun does not pick up its own output.
    let dest_path = match cfg.src_dir.parent() {
        Some(parent) => parent.join(&cfg.output_name),
        None => return Err(AppError::NoOutputParent(cfg.src_dir.clone())),
    };

    library::build_strip(&cfg.src_dir, &dest_path)?;

    Ok(dest_path)
}

fn print_fatal_err(fatal_err: &AppError) {
    error!(target: "app-errorlog", "{}", fatal_err);

    let mut source: Option<&(dyn Error + 'static)> = fatal_err.source();
    while let Some(e) = source {
        error!(target: "app-errorlog", "    caused by: {}", e);
        source = e.source();
    }
}

pub fn configure_logs() {
    use simplelog::*;

    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("TermLogger failed to initialize");
}

#[cfg(test)]
mod tests {
    use image::{ImageBuffer, Rgb};

    use super::*;

    #[test]
    //the destination is the output name joined onto the parent of the
    //source directory.
    fn test_dest_path_is_sibling_of_src_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let src_dir = tmp.path().join("textures");
        std::fs::create_dir(&src_dir).unwrap();

        let tex: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(8, 8, Rgb([7, 7, 7]));
        tex.save(src_dir.join("tex.png")).unwrap();

        let cfg = AppCfg {
            src_dir,
            output_name: PathBuf::from("strip.png"),
        };

        let dest_path = run_app_inner(&cfg).unwrap();
        assert_eq!(dest_path, tmp.path().join("strip.png"));
        assert!(dest_path.exists());
    }

    #[test]
    //the filesystem root has no parent, so there is nowhere to put the output.
    fn test_src_dir_without_parent_is_rejected() {
        let cfg = AppCfg {
            src_dir: PathBuf::from("/"),
            output_name: PathBuf::from("strip.png"),
        };

        match run_app_inner(&cfg) {
            Err(AppError::NoOutputParent(_)) => (),
            other => panic!("expected NoOutputParent, got {:?}", other),
        }
    }
}
