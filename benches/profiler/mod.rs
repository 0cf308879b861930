// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Criterion config shared by all benches. Tunables (all optional):
//   APISCOPE_BENCH_SAMPLES, APISCOPE_BENCH_WARMUP_SECS, APISCOPE_BENCH_MEASURE_SECS,
//   APISCOPE_BENCH_PROFILE_HZ (0 turns the flamegraph profiler off).

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr + Ord>(name: &str, default: T, min: T, max: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
        .clamp(min, max)
}

pub fn criterion() -> Criterion {
    let samples = env_or("APISCOPE_BENCH_SAMPLES", 60usize, 10, 200);
    let warmup = env_or("APISCOPE_BENCH_WARMUP_SECS", 2u64, 1, 60);
    let measure = env_or("APISCOPE_BENCH_MEASURE_SECS", 5u64, 1, 120);
    let profile_hz = env_or("APISCOPE_BENCH_PROFILE_HZ", 100i32, 0, 1000);

    let config = Criterion::default()
        .sample_size(samples)
        .warm_up_time(Duration::from_secs(warmup))
        .measurement_time(Duration::from_secs(measure));
    if profile_hz == 0 {
        return config;
    }
    config.with_profiler(PProfProfiler::new(profile_hz, Output::Flamegraph(None)))
}
