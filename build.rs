use std::io;
use std::io::ErrorKind;
use std::path::Path;

const PROTO_DIR: &str = "./protos/";
const GENERATED_DIR: &str = "./generated/";
const PROTOS: [&str; 2] = ["./protos/gateway.proto", "./protos/store.proto"];

fn main() -> io::Result<()> {
    for proto in PROTOS.iter() {
        println!("cargo:rerun-if-changed={}", proto);
    }

    ensure_dir(GENERATED_DIR)?;

    tonic_build::configure()
        .out_dir(GENERATED_DIR)
        .compile(&PROTOS, &[PROTO_DIR])
}

fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
    std::fs::create_dir(path).or_else(|e| match e.kind() {
        ErrorKind::AlreadyExists => Ok(()),
        _ => Err(e),
    })
}
