use eframe::egui::IconData;
use image::{ImageBuffer, Rgba};

// Generate the application icon at startup: a clock face on a night-sky
// gradient. No image asset is bundled.
pub fn create_app_icon() -> IconData {
    let width = 64u32;
    let height = 64u32;
    let mut img = ImageBuffer::<Rgba<u8>, Vec<u8>>::new(width, height);

    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let face_radius = width as f32 * 0.38;
    let ring_width = width as f32 * 0.05;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        let distance = (dx * dx + dy * dy).sqrt();

        // Background: vertical dusk gradient
        let t = y as f32 / height as f32;
        let mut r = (18.0 + 22.0 * t) as u8;
        let mut g = (22.0 + 28.0 * t) as u8;
        let mut b = (58.0 + 72.0 * t) as u8;

        if distance <= face_radius {
            // Clock face with a minute hand at twelve and an hour hand at three
            r = 245;
            g = 240;
            b = 224;
            let on_minute_hand = dx.abs() < 2.0 && dy < -2.0 && dy > -face_radius * 0.8;
            let on_hour_hand = dy.abs() < 2.0 && dx > 2.0 && dx < face_radius * 0.55;
            if on_minute_hand || on_hour_hand || distance < 3.0 {
                r = 40;
                g = 40;
                b = 48;
            }
        } else if (distance - face_radius) <= ring_width {
            r = 255;
            g = 150;
            b = 40;
        }

        *pixel = Rgba([r, g, b, 255]);
    }

    IconData {
        rgba: img.into_raw(),
        width,
        height,
    }
}
