use yew::prelude::*;

use crate::content::Diagram;
use crate::model::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct DiagramSvgProps {
    pub id: AttrValue,
    pub diagram: &'static Diagram,
    pub theme: Theme,
}

#[function_component(DiagramSvg)]
pub fn diagram_svg(props: &DiagramSvgProps) -> Html {
    let d = props.diagram;
    let p = props.theme.palette();
    // marker ids share one document, so scope them per diagram
    let marker = format!("arrow-{}", props.id);
    let nodes = d.nodes.iter().map(|n| {
        let c = n.center();
        html! {<g>
            <rect x={n.x.to_string()} y={n.y.to_string()} width={n.w.to_string()} height={n.h.to_string()}
                rx="8" fill="rgba(255,255,255,0.03)" stroke={n.accent} stroke-width="1.5" />
            <text x={c.x.to_string()} y={(c.y - 4.0).to_string()} text-anchor="middle" fill={n.accent}
                font-size="13" font-family="monospace" font-weight="600">{ n.label }</text>
            <text x={c.x.to_string()} y={(c.y + 14.0).to_string()} text-anchor="middle" fill="#8c827a"
                font-size="10" font-family="monospace">{ n.detail }</text>
        </g>}
    });
    let edges = (0..d.edges.len()).filter_map(|i| {
        let (a, b) = d.edge_points(i)?;
        let label = d.edges[i].label;
        let mid = a.midpoint(b);
        Some(html! {<g>
            <line x1={a.x.to_string()} y1={a.y.to_string()} x2={b.x.to_string()} y2={b.y.to_string()}
                stroke="#6b6560" stroke-width="1.5" marker-end={format!("url(#{marker})")} />
            { if label.is_empty() { html!{} } else { html!{
                <text x={mid.x.to_string()} y={(mid.y - 6.0).to_string()} text-anchor="middle"
                    fill={p.subtle} font-size="10" font-family="monospace">{ label }</text>
            } } }
        </g>})
    });
    html! {
        <svg viewBox={d.view_box()} xmlns="http://www.w3.org/2000/svg" style="width:100%; height:100%;">
            <defs>
                <marker id={marker.clone()} markerWidth="8" markerHeight="8" refX="6" refY="3" orient="auto">
                    <path d="M0,0 L0,6 L8,3 z" fill="#6b6560" />
                </marker>
            </defs>
            { for edges }
            { for nodes }
        </svg>
    }
}
