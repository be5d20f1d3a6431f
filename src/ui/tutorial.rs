//! Tutorial page: background effects, step reveal and video hover glow

use rand::Rng;
use web_sys::Document;

use super::{dom, run};
use super::observer::Intersections;
use crate::core::Result;
use crate::core::config::EffectsConfig;
use crate::core::effects::{self, DATA_CHAR_CLASS, PARTICLE_CLASS};

/// Fill `#particles` with floating particles
pub fn create_particles<R: Rng + ?Sized>(
    document: &Document,
    rng: &mut R,
    count: usize,
) -> Result<usize> {
    let Some(container) = document.get_element_by_id("particles") else {
        return Ok(0);
    };

    let particles = effects::particles(rng, count);
    for particle in &particles {
        let node = document.create_element("div")?;
        node.set_class_name(PARTICLE_CLASS);
        for (property, value) in particle.style() {
            dom::set_style(&node, property, &value)?;
        }
        container.append_child(&node)?;
    }
    Ok(particles.len())
}

/// Fill `#dataStream` with falling glyph columns
pub fn create_data_stream<R: Rng + ?Sized>(
    document: &Document,
    rng: &mut R,
    count: usize,
) -> Result<usize> {
    let Some(container) = document.get_element_by_id("dataStream") else {
        return Ok(0);
    };

    let stream = effects::data_stream(rng, count);
    for glyph in &stream {
        let node = document.create_element("div")?;
        node.set_class_name(DATA_CHAR_CLASS);
        node.set_text_content(Some(&glyph.glyph.to_string()));
        for (property, value) in glyph.style() {
            dom::set_style(&node, property, &value)?;
        }
        container.append_child(&node)?;
    }
    Ok(stream.len())
}

/// Add `visible` to tutorial steps as they scroll into view
pub fn init_step_reveal(document: &Document, config: &EffectsConfig) -> Result<()> {
    let steps = dom::query_document(document, ".tutorial-step[data-step]")?;
    if steps.is_empty() {
        return Ok(());
    }

    let intersections = Intersections::new(
        config.step_threshold,
        &config.step_root_margin(),
        |target, is_intersecting, _| {
            if is_intersecting {
                let _ = dom::set_class(target, "visible", true);
            }
        },
    )?;
    for step in &steps {
        intersections.observe(step);
    }
    intersections.keep_alive();
    Ok(())
}

/// Glow the video frame while hovered
pub fn init_video_effects(document: &Document) -> Result<()> {
    let Some(frame) = document.get_element_by_id("videoFrame") else {
        return Ok(());
    };

    let enter = frame.clone();
    dom::listen(&frame, "mouseenter", move |_| {
        let _ = dom::set_class(&enter, "video-playing", true);
    })?;
    let leave = frame.clone();
    dom::listen(&frame, "mouseleave", move |_| {
        let _ = dom::set_class(&leave, "video-playing", false);
    })
}

/// Run every tutorial page effect; each one fails independently
pub fn init_tutorial(config: &EffectsConfig) -> Result<()> {
    let document = dom::document()?;
    let mut rng = rand::thread_rng();

    run("particles", || {
        create_particles(&document, &mut rng, config.particle_count).map(|_| ())
    });
    run("data stream", || {
        create_data_stream(&document, &mut rng, config.data_char_count).map(|_| ())
    });
    run("tutorial steps", || init_step_reveal(&document, config));
    run("video frame", || init_video_effects(&document));
    Ok(())
}
