#![allow(non_snake_case)]

use charming::{component::{Axis, Grid, Title}, element::{AxisLabel, AxisType, Color, LineStyle, SplitLine, TextStyle, Tooltip}, series::Bar, Chart, WasmRenderer};
use dioxus::{logger::tracing::error, prelude::*};

use crate::utils::protocols::Protocol;

static CANVAS_ID_TVL: &str = "tvl-bar";
pub const TOP_PROTOCOLS: usize = 10;

/// Injects echarts once per document and answers `true` when the library is
/// usable, `false` if the script fails to load.
pub const ECHARTS_LOADER_JS: &str = r#"
if (typeof echarts !== 'undefined') {
  dioxus.send(true);
} else {
  let scriptElem = document.getElementById('echarts-lib');
  if (!scriptElem) {
    scriptElem = document.createElement('script');
    scriptElem.id = 'echarts-lib';
    scriptElem.src = 'https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js';
    scriptElem.async = true;
    document.head.appendChild(scriptElem);
  }
  scriptElem.addEventListener('load', function() {
    dioxus.send(true);
  });
  scriptElem.addEventListener('error', function() {
    console.error('Error loading echarts');
    dioxus.send(false);
  });
}
"#;

/// (name, tvl in $M) of the `n` largest protocols, largest first
pub fn top_by_tvl(protocols: &[Protocol], n: usize) -> Vec<(String, f64)> {
  let mut ranked: Vec<&Protocol> = protocols.iter().collect();
  ranked.sort_by(|a, b| b.tvl.total_cmp(&a.tvl));
  ranked
    .into_iter()
    .take(n)
    .map(|p| (p.name.clone(), (p.tvl / 1_000_000.0 * 100.0).round() / 100.0))
    .collect()
}

#[component]
pub fn TvlChart(protocols: ReadOnlySignal<Vec<Protocol>>, ready: ReadOnlySignal<bool>) -> Element {
  let renderer = use_signal(|| WasmRenderer::new_opt(None, Some(320)));

  use_effect(move || {
    // re-runs once the loader flips `ready`
    if !ready() {
      return;
    }
    let (names, tvl): (Vec<String>, Vec<f64>) = top_by_tvl(&protocols(), TOP_PROTOCOLS).into_iter().unzip();

    let chart = Chart::new()
    .title(
      Title::new()
      .text("Top liquid staking protocols by TVL")
      .text_style(
        TextStyle::new()
        .color("rgba(255, 255, 255, 1)")
        .font_family("Arial")
        .font_size(18)
      )
      .padding((12, 0, 5, 20))
    )
    .background_color("rgba(41,52,65,1)")
    .color(vec![Color::Value("#72ccff".to_string())])
    .tooltip(
      Tooltip::new()
      .formatter("{b}: ${c}M")
    )
    .grid(
      Grid::new()
      .contain_label(true)
      .left("6%")
      .right("4%")
    )
    .x_axis(
      Axis::new()
      .type_(AxisType::Category)
      .data(names)
      .axis_label(
        AxisLabel::new()
        .color("#aaaaaa")
      )
    )
    .y_axis(
      Axis::new()
      .type_(AxisType::Value)
      .name("TVL ($M)")
      .split_line(
        SplitLine::new()
        .line_style(
          LineStyle::new()
          .color("#737373")
        )
      )
      .axis_label(
        AxisLabel::new()
        .color("#aaaaaa")
      )
    )
    .series(
      Bar::new()
      .name("TVL")
      .data(tvl)
    );

    if let Err(e) = renderer.read_unchecked().render(CANVAS_ID_TVL, &chart) {
      error!("failed to render tvl chart: {:?}", e);
    }
  });

  rsx! {
    div {
      id: CANVAS_ID_TVL,
      onmounted: move |_evt| {
        document::eval(
          r#"
          var millis = 350;
          setTimeout(function() {
              const element = document.getElementById('tvl-bar');
              if (!element || typeof echarts === 'undefined') {return;}
              var chart = echarts.getInstanceByDom(element);
              if (!chart) {return;}
              window.addEventListener('resize', function() {
                  chart.resize();
              });
          }, millis)
          "#);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn protocol(name: &str, tvl: f64) -> Protocol {
    Protocol { name: name.to_string(), tvl, ..Default::default() }
  }

  #[test]
  fn takes_largest_first_in_millions() {
    let all = vec![protocol("small", 1_500_000.0), protocol("big", 2_345_678_901.0), protocol("mid", 40_000_000.0)];
    let top = top_by_tvl(&all, 2);
    assert_eq!(top, vec![("big".to_string(), 2345.68), ("mid".to_string(), 40.0)]);
  }

  #[test]
  fn loader_answers_on_every_path() {
    // already present, loaded now, failed
    assert_eq!(ECHARTS_LOADER_JS.matches("dioxus.send(true)").count(), 2);
    assert_eq!(ECHARTS_LOADER_JS.matches("dioxus.send(false)").count(), 1);
    // a remount reuses the pending script instead of appending another
    assert!(ECHARTS_LOADER_JS.contains("getElementById('echarts-lib')"));
  }

  #[test]
  fn fewer_protocols_than_requested() {
    assert_eq!(top_by_tvl(&[protocol("only", 1_000_000.0)], TOP_PROTOCOLS).len(), 1);
    assert!(top_by_tvl(&[], TOP_PROTOCOLS).is_empty());
  }
}
