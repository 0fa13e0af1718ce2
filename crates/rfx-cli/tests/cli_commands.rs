//! End-to-end tests for the CLI commands, driven through the library.

use std::process::ExitCode;

use pretty_assertions::assert_eq;
use rfx_backend_audio::wav::parse_wav;
use rfx_backend_audio::PresetKind;
use rfx_cli::commands::{self, ExportOverrides};
use rfx_cli::{exit_code_for, EXIT_EXPORT_ERROR, EXIT_INPUT_ERROR};
use rfx_spec::format::read_file;
use rfx_spec::{ExportFormat, ParamsFileKind};
use tempfile::tempdir;

fn path_str(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_preset_writes_each_params_kind() {
    let dir = tempdir().unwrap();
    let expected = commands::preset::build(PresetKind::Laser, 3, None);

    for (name, kind) in [
        ("laser.rfx", ParamsFileKind::Rfx),
        ("laser.json", ParamsFileKind::Json),
        ("laser.sfs", ParamsFileKind::Sfs),
    ] {
        let path = dir.path().join(name);
        let code = commands::preset::run(
            PresetKind::Laser,
            3,
            None,
            Some(&path_str(&path)),
            ExportOverrides::default(),
            false,
        )
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let loaded = read_file(&path).unwrap();
        assert_eq!(loaded.kind, kind);
        if kind == ParamsFileKind::Sfs {
            assert_eq!(loaded.params.rand_seed, 0);
            assert_eq!(loaded.params.waveform, expected.waveform);
            assert_eq!(loaded.params.slide, expected.slide);
        } else {
            assert_eq!(loaded.params, expected);
        }
    }
}

#[test]
fn test_preset_renders_wav_with_overrides() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("boom.wav");
    let overrides = ExportOverrides {
        sample_rate: Some(22050),
        bits: Some(8),
        channels: None,
    };

    commands::preset::run(
        PresetKind::Explosion,
        11,
        Some(2),
        Some(&path_str(&path)),
        overrides,
        true,
    )
    .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let parsed = parse_wav(&bytes).unwrap();
    assert_eq!(parsed.format, ExportFormat::new(22050, 8, 1).unwrap());
    assert!(parsed.num_frames() > 0);
}

#[test]
fn test_convert_then_render_uses_stored_format() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("jump.json");
    let rfx = dir.path().join("jump.rfx");
    let wav = dir.path().join("jump.wav");

    commands::preset::run(
        PresetKind::Jump,
        5,
        None,
        Some(&path_str(&json)),
        ExportOverrides::default(),
        false,
    )
    .unwrap();

    let stereo = ExportOverrides {
        channels: Some(2),
        bits: Some(32),
        ..ExportOverrides::default()
    };
    commands::convert::run(&path_str(&json), &path_str(&rfx), stereo).unwrap();

    let loaded = read_file(&rfx).unwrap();
    assert_eq!(loaded.export, Some(ExportFormat::new(44100, 32, 2).unwrap()));

    commands::render::run(
        &path_str(&rfx),
        &path_str(&wav),
        ExportOverrides::default(),
        false,
    )
    .unwrap();

    let bytes = std::fs::read(&wav).unwrap();
    let parsed = parse_wav(&bytes).unwrap();
    assert_eq!(parsed.format_tag, 3);
    assert_eq!(parsed.format.channels, 2);
}

#[test]
fn test_render_is_deterministic() {
    let dir = tempdir().unwrap();
    let params = dir.path().join("blip.rfx");
    commands::preset::run(
        PresetKind::Blip,
        1,
        None,
        Some(&path_str(&params)),
        ExportOverrides::default(),
        false,
    )
    .unwrap();

    let a = dir.path().join("a.wav");
    let b = dir.path().join("b.wav");
    for out in [&a, &b] {
        commands::render::run(
            &path_str(&params),
            &path_str(out),
            ExportOverrides::default(),
            true,
        )
        .unwrap();
    }
    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
}

#[test]
fn test_inspect_params_and_wav() {
    let dir = tempdir().unwrap();
    let params = dir.path().join("hit.sfs");
    let wav = dir.path().join("hit.wav");

    commands::preset::run(
        PresetKind::Hit,
        8,
        None,
        Some(&path_str(&params)),
        ExportOverrides::default(),
        false,
    )
    .unwrap();
    commands::render::run(
        &path_str(&params),
        &path_str(&wav),
        ExportOverrides::default(),
        false,
    )
    .unwrap();

    for json in [false, true] {
        assert_eq!(
            commands::inspect::run(&path_str(&params), json).unwrap(),
            ExitCode::SUCCESS
        );
        assert_eq!(
            commands::inspect::run(&path_str(&wav), json).unwrap(),
            ExitCode::SUCCESS
        );
    }
}

#[test]
fn test_render_rejects_non_wav_output() {
    let dir = tempdir().unwrap();
    let params = dir.path().join("p.json");
    std::fs::write(&params, "{}").unwrap();

    let err = commands::render::run(
        &path_str(&params),
        &path_str(&dir.path().join("out.sfs")),
        ExportOverrides::default(),
        false,
    )
    .unwrap_err();
    assert_eq!(exit_code_for(&err), EXIT_INPUT_ERROR);
}

#[test]
fn test_convert_to_wav_is_rejected() {
    let dir = tempdir().unwrap();
    let params = dir.path().join("p.json");
    std::fs::write(&params, "{}").unwrap();

    let err = commands::convert::run(
        &path_str(&params),
        &path_str(&dir.path().join("out.wav")),
        ExportOverrides::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("rfx render"));
    assert_eq!(exit_code_for(&err), EXIT_INPUT_ERROR);
}

#[test]
fn test_corrupt_input_is_input_error() {
    let dir = tempdir().unwrap();
    let params = dir.path().join("bad.sfs");
    std::fs::write(&params, [1, 2, 3]).unwrap();

    let err = commands::render::run(
        &path_str(&params),
        &path_str(&dir.path().join("out.wav")),
        ExportOverrides::default(),
        false,
    )
    .unwrap_err();
    assert_eq!(exit_code_for(&err), EXIT_INPUT_ERROR);
    assert!(!dir.path().join("out.wav").exists());
}

#[test]
fn test_unwritable_output_is_export_error() {
    let dir = tempdir().unwrap();
    let params = dir.path().join("p.json");
    std::fs::write(&params, "{}").unwrap();
    let missing = dir.path().join("no_such_dir").join("out.wav");

    let err = commands::render::run(
        &path_str(&params),
        &path_str(&missing),
        ExportOverrides::default(),
        false,
    )
    .unwrap_err();
    assert_eq!(exit_code_for(&err), EXIT_EXPORT_ERROR);
}

#[test]
fn test_invalid_override_is_input_error() {
    let dir = tempdir().unwrap();
    let params = dir.path().join("p.json");
    std::fs::write(&params, "{}").unwrap();

    let err = commands::render::run(
        &path_str(&params),
        &path_str(&dir.path().join("out.wav")),
        ExportOverrides {
            sample_rate: Some(8000),
            ..ExportOverrides::default()
        },
        false,
    )
    .unwrap_err();
    assert_eq!(exit_code_for(&err), EXIT_INPUT_ERROR);
}

#[test]
fn test_convert_non_finite_sfs_to_json_reads_back() {
    let dir = tempdir().unwrap();
    let sfs = dir.path().join("odd.sfs");
    let json = dir.path().join("odd.json");
    let wav = dir.path().join("odd.wav");

    let params = rfx_spec::ParameterSet {
        slide: f32::NAN,
        ..rfx_spec::ParameterSet::default()
    };
    std::fs::write(&sfs, rfx_spec::format::sfs::to_bytes(&params)).unwrap();

    commands::convert::run(&path_str(&sfs), &path_str(&json), ExportOverrides::default()).unwrap();

    let loaded = read_file(&json).unwrap();
    assert_eq!(loaded.params, params.clamped());

    commands::render::run(
        &path_str(&json),
        &path_str(&wav),
        ExportOverrides::default(),
        false,
    )
    .unwrap();
    assert!(wav.exists());
}
