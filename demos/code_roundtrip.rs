//! Edit a decoded crosshair and print the re-encoded share code.

fn main() {
    let stock = xhair::CrosshairSettings::default();
    let code = xhair::encode(&stock);
    println!("stock crosshair: {}", code);

    let mut edited = xhair::decode(&code);
    edited.dot = true;
    edited.t_style = true;
    edited.color_index = 0; // preset red
    println!("edited crosshair: {}", xhair::encode(&edited));
}
