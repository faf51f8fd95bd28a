use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vpath::{Os, PathStyle, Validation, VirtualPath};

const POSIX: PathStyle = PathStyle::new(Os::Posix);
const WINDOWS: PathStyle = PathStyle::new(Os::Windows);

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    // Benchmark plain absolute path parsing
    group.bench_function("absolute_path", |b| {
        b.iter(|| VirtualPath::parse_with(black_box("/absolute/path/to/file.txt"), POSIX));
    });

    // Benchmark hostname recognition
    group.bench_function("hostname_path", |b| {
        b.iter(|| VirtualPath::parse_with(black_box("//server/share/dir/file.txt"), POSIX));
    });

    // Benchmark IPv4-literal hostname validation
    group.bench_function("ipv4_hostname", |b| {
        b.iter(|| VirtualPath::parse_with(black_box("//[192.168.0.1]/share/"), POSIX));
    });

    // Benchmark drive-letter parsing with alternative separators
    group.bench_function("windows_drive", |b| {
        b.iter(|| VirtualPath::parse_with(black_box(r"C:\Users\dev\project\main.rs"), WINDOWS));
    });

    // Benchmark path with . and .. components
    group.bench_function("with_dots", |b| {
        b.iter(|| VirtualPath::parse_with(black_box("/a/b/../c/./d/"), POSIX));
    });

    // Benchmark lenient sanitization of a dirty path
    group.bench_function("lenient_sanitize", |b| {
        let style = PathStyle::new(Os::Windows).with_validation(Validation::Lenient);
        b.iter(|| VirtualPath::parse_with(black_box("/a/b?c/fi|le<1>.txt"), style));
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let base = VirtualPath::parse_with("//host/a/b/c/d/", POSIX).unwrap();
    let shallow = VirtualPath::parse_with("../g", POSIX).unwrap();
    let deep = VirtualPath::parse_with("../../../../../g", POSIX).unwrap();

    // Benchmark a single parent step
    group.bench_function("single_parent", |b| {
        b.iter(|| {
            let mut path = base.clone();
            path.resolve(black_box(&shallow)).unwrap();
            path
        });
    });

    // Benchmark root clamping on excess parent steps
    group.bench_function("clamped_at_root", |b| {
        b.iter(|| {
            let mut path = base.clone();
            path.resolve(black_box(&deep)).unwrap();
            path
        });
    });

    group.finish();
}

fn bench_relative(c: &mut Criterion) {
    let mut group = c.benchmark_group("relative");

    let target = VirtualPath::parse_with("/users/test/projects/app/src/path/", POSIX).unwrap();
    let near = VirtualPath::parse_with("/users/test/projects/app/docs/", POSIX).unwrap();
    let far = VirtualPath::parse_with("/var/lib/other/", POSIX).unwrap();

    // Benchmark a mostly-shared prefix
    group.bench_function("shared_prefix", |b| {
        b.iter(|| target.relative_to(black_box(&near)));
    });

    // Benchmark a divergent prefix (maximum up-walk)
    group.bench_function("divergent_prefix", |b| {
        b.iter(|| target.relative_to(black_box(&far)));
    });

    // Benchmark the identical-path fast case
    group.bench_function("identical", |b| {
        b.iter(|| target.relative_to(black_box(&target)));
    });

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");

    let path = VirtualPath::parse_with("//host/a/b/c/d/file.tar.gz", POSIX).unwrap();

    group.bench_function("to_string", |b| {
        b.iter(|| black_box(&path).to_string());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_resolve,
    bench_relative,
    bench_serialization
);
criterion_main!(benches);
