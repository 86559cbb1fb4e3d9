use std::{env, io::Write, path::PathBuf, process};

use dicom_parser::config::{self, Config};
use dicom_parser::{render, CommonResult, DicomReader};
use env_logger::Builder;
use log::LevelFilter;

struct Args {
    file_path: PathBuf,
    config_path: Option<PathBuf>,
    png_path: Option<PathBuf>,
    dump: bool,
}

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} <file.dcm> [--config <SysCfg.ini>] [--png <output.png>] [--dump]",
        program
    );
    process::exit(1);
}

fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("dicom_parser");

    let mut file_path = None;
    let mut config_path = None;
    let mut png_path = None;
    let mut dump = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => match iter.next() {
                Some(v) => config_path = Some(PathBuf::from(v)),
                None => usage(program),
            },
            "--png" => match iter.next() {
                Some(v) => png_path = Some(PathBuf::from(v)),
                None => usage(program),
            },
            "--dump" => dump = true,
            "-h" | "--help" => usage(program),
            other if file_path.is_none() => file_path = Some(PathBuf::from(other)),
            _ => usage(program),
        }
    }

    match file_path {
        Some(file_path) => Args {
            file_path,
            config_path,
            png_path,
            dump,
        },
        None => usage(program),
    }
}

fn load_config(path: Option<&PathBuf>) -> CommonResult<Config> {
    match path {
        Some(path) => Config::load(path),
        // 默认配置文件不存在时使用空配置
        None if PathBuf::from(config::DEFAULT_CONFIG_FILE).exists() => {
            Config::load(config::DEFAULT_CONFIG_FILE)
        }
        None => Ok(Config::default()),
    }
}

fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_default_env();

    if let Some(level) = level {
        builder.filter_level(level);
    } else if env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Info);
    }

    builder
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn run(args: &Args, config: &Config) -> CommonResult<()> {
    let mut reader = DicomReader::new().with_header_dump(args.dump);

    if let Some(mapping) = config.get(config::KEY_TAG_MAPPING_FILE) {
        reader
            .dictionary_mut()
            .load_tag_mapping(PathBuf::from(mapping).as_path())?;
    }

    let (info, pixels) = reader.read_image(&args.file_path)?;

    if args.dump {
        for line in reader.header() {
            println!("{}", line);
        }
        println!("{}", "=".repeat(60));
    }

    println!("version: {:?}", info.version);
    println!("transfer syntax: {}", info.transfer_syntax_uid);
    println!("modality: {}", info.modality);
    println!("photometric interpretation: {}", info.photometric_interpretation);
    println!("size: {} x {}", info.width, info.height);
    println!("bits allocated: {}", info.pixel_depth);
    println!("pixel representation: {}", info.pixel_representation);
    println!("rescale: slope {} intercept {}", info.rescale_slope, info.rescale_intercept);
    println!("window: center {} width {}", info.window_center, info.window_width);
    println!("pixel data offset: {}", info.pixel_data_offset);

    let png_path = args
        .png_path
        .clone()
        .or_else(|| config.get(config::KEY_OUTPUT_IMAGE).map(PathBuf::from));

    if let Some(png_path) = png_path {
        render::write_image_pixels_to_file(&info, &pixels, &png_path)?;
    }

    Ok(())
}

fn main() {
    let args = parse_args();

    let config = match load_config(args.config_path.as_ref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("ERROR: {}", error);
            process::exit(1);
        }
    };

    let level = match config.log_level() {
        Ok(level) => level,
        Err(error) => {
            eprintln!("ERROR: {}", error);
            process::exit(1);
        }
    };

    init_logger(level);

    if let Err(error) = run(&args, &config) {
        log::error!("failed to read {}: {}", args.file_path.display(), error);
        process::exit(1);
    }
}
