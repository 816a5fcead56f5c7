use anyhow::{bail, Context, Result};
use frostpaint::image_data::encode_data_uri;
use frostpaint::{AnalysisService, DetectRequest, DetectResponse};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;

use super::print_json;
use crate::utils::{collect_images, expand_tilde, mime_for_path};

/// Detect images concurrently, at most one per core; output is keyed by path.
pub async fn cmd_detect(service: AnalysisService, paths: &[PathBuf]) -> Result<()> {
    let images = collect_images(paths);
    if images.is_empty() {
        bail!("No images found in the given paths");
    }

    let results: BTreeMap<String, DetectResponse> =
        run_bounded(images, max_parallel(), move |path| {
            let bytes =
                fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
            Ok((path.display().to_string(), service.detect_bytes(&bytes)))
        })
        .await?
        .into_iter()
        .collect();

    print_json(&results)
}

fn max_parallel() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Run `work` on the blocking pool with at most `limit` items in flight.
/// Results keep input order; the first error wins.
pub(crate) async fn run_bounded<I, T, F>(items: Vec<I>, limit: usize, work: F) -> Result<Vec<T>>
where
    I: Send + 'static,
    T: Send + 'static,
    F: Fn(I) -> Result<T> + Send + Sync + 'static,
{
    let permits = Arc::new(Semaphore::new(limit.max(1)));
    let work = Arc::new(work);

    let mut tasks = Vec::with_capacity(items.len());
    for item in items {
        let permit = Arc::clone(&permits)
            .acquire_owned()
            .await
            .context("Worker pool closed")?;
        let work = Arc::clone(&work);
        tasks.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            work(item)
        }));
    }

    let mut results = Vec::with_capacity(tasks.len());
    for task in tasks {
        results.push(task.await.context("Detect task failed")??);
    }
    Ok(results)
}

pub fn cmd_extract(
    service: &AnalysisService,
    path: &Path,
    k: usize,
    curated: bool,
) -> Result<()> {
    let request = DetectRequest::new(read_data_uri(path)?);
    if curated {
        print_json(&service.extract_with_curated(&request, k)?)
    } else {
        print_json(&service.extract_palette(&request, k)?)
    }
}

/// Read an image file as a base64 data URI
pub(crate) fn read_data_uri(path: &Path) -> Result<String> {
    let path = expand_tilde(path);
    let bytes = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(encode_data_uri(mime_for_path(&path), &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_bounded_caps_in_flight() {
        let active = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let (a, p) = (Arc::clone(&active), Arc::clone(&peak));

        let out = run_bounded((0..16).collect(), 3, move |i: usize| {
            let now = a.fetch_add(1, Ordering::SeqCst) + 1;
            p.fetch_max(now, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(10));
            a.fetch_sub(1, Ordering::SeqCst);
            Ok(i * 2)
        })
        .await
        .unwrap();

        assert_eq!(out, (0..16).map(|i| i * 2).collect::<Vec<_>>());
        assert!(peak.load(Ordering::SeqCst) <= 3);
        assert_eq!(active.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_run_bounded_propagates_errors() {
        let result = run_bounded(vec![1, 2, 3], 2, |i: i32| {
            if i == 2 {
                bail!("bad item {i}");
            }
            Ok(i)
        })
        .await;
        assert!(result.is_err());
    }
}
