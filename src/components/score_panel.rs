use yew::prelude::*;

use crate::model::PlayStatus;

#[derive(Properties, PartialEq, Clone)]
pub struct ScorePanelProps {
    pub score: u64,
    pub status: PlayStatus,
}

#[function_component]
pub fn ScorePanel(props: &ScorePanelProps) -> Html {
    let instructions_color = match props.status {
        PlayStatus::Playing => "#ffffff",
        PlayStatus::Paused => "#7d8590",
    };
    html! {
        <div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); display:flex; flex-direction:column; align-items:center; gap:10px; pointer-events:none;">
            <div id="score-display" data-score={props.score.to_string()} style="width:240px; box-sizing:border-box; background:rgba(48,54,61,0.9); border-radius:20px; padding:14px 32px; display:flex; flex-direction:column; align-items:center; gap:4px;">
                <span style="font-size:14px; font-weight:bold; color:#7d8590;">{"SCORE"}</span>
                <span id="score-value" style="font-size:48px; font-weight:bold; color:#00ff88; font-variant-numeric:tabular-nums;">{ props.score }</span>
            </div>
            <div id="instructions" style="width:360px; box-sizing:border-box; background:rgba(33,38,45,0.9); border-radius:12px; padding:10px 20px; text-align:center;">
                <span style={format!("font-size:16px; color:{};", instructions_color)}>{ props.status.instructions() }</span>
            </div>
        </div>
    }
}
