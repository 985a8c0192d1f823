use yew::prelude::*;

use crate::motion::radar::{layout, sweep_css, RadarGrid, SWEEP_PERIOD_SECS};
use crate::motion::reveal::{use_reveal, RevealOptions};

const GRID: RadarGrid = RadarGrid::new(7, 7);

/// Cells that light up as the sweep passes: the profiles the product flags.
const PRIORITY: [(u32, u32); 6] = [(0, 4), (1, 1), (2, 6), (4, 0), (5, 5), (6, 2)];

#[function_component(RadarSection)]
pub fn radar_section() -> Html {
    let node = use_node_ref();
    // Re-arms on exit so the sweep only runs while on screen
    let visible = use_reveal(node.clone(), RevealOptions::resetting(0.1));

    let cells = use_memo(|_| layout(GRID, &PRIORITY, SWEEP_PERIOD_SECS), ());
    let css = use_memo(|_| sweep_css(SWEEP_PERIOD_SECS), ());
    let paused = (!visible).then(|| "paused");

    html! {
        <section class="radar-section" ref={node}>
            <div class="radar-copy">
                <h2>{"Always Scanning for Your Next Hire"}</h2>
                <p>{"Hirewire watches every channel you source from and surfaces candidates the moment they match your ideal profile."}</p>
            </div>
            <div class="radar" style={format!("grid-template-columns: repeat({}, 1fr);", GRID.cols)}>
                <div class={classes!("radar-sweep", paused)}></div>
                {
                    cells.iter().map(|cell| {
                        let style = if cell.highlighted {
                            format!(
                                "grid-row: {}; grid-column: {}; animation-delay: {:.3}s;",
                                cell.row + 1,
                                cell.col + 1,
                                cell.css_delay_secs(SWEEP_PERIOD_SECS)
                            )
                        } else {
                            format!("grid-row: {}; grid-column: {};", cell.row + 1, cell.col + 1)
                        };
                        html! {
                            <div
                                key={format!("{}-{}", cell.row, cell.col)}
                                class={classes!("radar-cell", cell.highlighted.then(|| "highlighted"), paused)}
                                {style}
                            ></div>
                        }
                    }).collect::<Html>()
                }
                <div class="radar-core" style={format!("grid-row: {}; grid-column: {};", GRID.rows / 2 + 1, GRID.cols / 2 + 1)}></div>
            </div>
            <style>{ (*css).clone() }</style>
            <style>
                {r#"
                .radar-section {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }
                .radar-copy h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .radar-copy p {
                    color: #999;
                    font-size: 1.1rem;
                }
                .radar {
                    position: relative;
                    display: grid;
                    gap: 6px;
                    aspect-ratio: 1;
                    border-radius: 50%;
                    overflow: hidden;
                    padding: 8%;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                }
                .radar-sweep {
                    position: absolute;
                    inset: 0;
                    background: conic-gradient(from 0deg, rgba(126, 178, 255, 0.35), transparent 25%);
                    pointer-events: none;
                }
                .radar-cell {
                    border-radius: 6px;
                    background: rgba(126, 178, 255, 0.08);
                }
                .radar-core {
                    border-radius: 50%;
                    background: #7EB2FF;
                    box-shadow: 0 0 24px rgba(126, 178, 255, 0.8);
                }
                @media (max-width: 768px) {
                    .radar-section { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
