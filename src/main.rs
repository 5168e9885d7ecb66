use mergington_activities::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
