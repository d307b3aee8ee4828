use std::path::PathBuf;

use crate::app::AppCfg;

pub fn parse_args() -> AppCfg {
    let src_dir = "Source dir";
    let output_name = "Output file name";

    let mut clap_app = clap::App::new("Texture strip builder")
        .version("0.1")
        .about("Concatenates the textures in a directory into a single horizontal strip image");

    clap_app = clap_app.arg(
        clap::Arg::with_name(src_dir)
            .index(1)
            .required(true)
            .help("Directory containing the .png and .jpg textures to concatenate."),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(output_name)
            .index(2)
            .required(true)
            .help("File name for the strip image. The image is written into the parent directory of the source directory, with the format inferred from the extension."),
    );

    //clap terminates the process itself when a required argument is missing.
    let matches = clap_app.get_matches();

    AppCfg {
        src_dir: PathBuf::from(matches.value_of_os(src_dir).unwrap_or_else(|| unreachable!())),
        output_name: PathBuf::from(matches.value_of_os(output_name).unwrap_or_else(|| unreachable!())),
    }
}
