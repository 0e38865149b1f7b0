use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use aida_image::Image;
use aida_imgproc::color::{alpha_blend, hsv_from_rgba, ycbcr_from_rgba, WHITE};
use aida_imgproc::parallel::ExecutionStrategy;

// naive version indexing the RGBA quadruples by hand
fn hsv_vanilla(src: &Image<u8, 4>, dst: &mut Image<u8, 3>) {
    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();
    for i in 0..src.num_pixels() {
        let hsv = aida_imgproc::color::pixel_hsv_from_rgb(
            src_data[i * 4],
            src_data[i * 4 + 1],
            src_data[i * 4 + 2],
        );
        dst_data[i * 3..i * 3 + 3].copy_from_slice(&hsv);
    }
}

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("Color");

    for (width, height) in [(256usize, 224usize), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image with a gradient so every hue sector is visited
        let image_data = (0..width * height * 4)
            .map(|i| (i % 251) as u8)
            .collect::<Vec<_>>();
        let image_size = [*width, *height].into();
        let image = Image::<u8, 4>::new(image_size, image_data).unwrap();

        // output images
        let blended = Image::<u8, 4>::from_size_val(image.size(), 0).unwrap();
        let triplets = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("hsv_vanilla", &parameter_string),
            &(&image, &triplets),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(hsv_vanilla(src, &mut dst)))
            },
        );

        for (name, strategy) in [
            ("serial", ExecutionStrategy::Serial),
            ("parallel_rows", ExecutionStrategy::ParallelRows),
        ] {
            group.bench_with_input(
                BenchmarkId::new(format!("alpha_blend_{name}"), &parameter_string),
                &(&image, &blended),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(alpha_blend(src, &mut dst, WHITE, strategy)))
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("hsv_{name}"), &parameter_string),
                &(&image, &triplets),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(hsv_from_rgba(src, &mut dst, strategy)))
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("ycbcr_{name}"), &parameter_string),
                &(&image, &triplets),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(ycbcr_from_rgba(src, &mut dst, strategy)))
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_color);
criterion_main!(benches);
