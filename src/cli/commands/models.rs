use common::ModelKind;

pub fn list_models() {
    for model in ModelKind::ALL {
        println!("{:<6} {}", model.as_str(), model.label());
    }
}
