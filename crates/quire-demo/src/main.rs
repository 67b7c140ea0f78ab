//! Headless walkthrough of the UI core.
//!
//! Builds an options panel and an inventory board, then replays a short
//! scripted input session through `Ui::frame_with_dt`, logging the events
//! each frame produces. Run with `RUST_LOG=debug` to see widget chatter.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};

use quire_engine::batch::DrawData;
use quire_engine::logging::{init_logging, LoggingConfig};
use quire_ui::prelude::*;

const VIEWPORT: Viewport = Viewport::new(820.0, 560.0);
const DT: f32 = 1.0 / 60.0;

/// One scripted step: events to feed, then a frame.
enum Step {
    MoveTo(f32, f32),
    Press,
    Release,
    Type(&'static str),
    Key(Key),
    Idle(u32),
}

struct Demo {
    ui: Ui,
    frames: u64,
}

impl Demo {
    fn run(&mut self, script: &[Step]) {
        for step in script {
            match *step {
                Step::MoveTo(x, y) => self.ui.handle_event(InputEvent::PointerMoved(Vec2::new(x, y))),
                Step::Press => self.ui.handle_event(InputEvent::PointerButton {
                    button: MouseButton::Left,
                    state: MouseButtonState::Pressed,
                }),
                Step::Release => self.ui.handle_event(InputEvent::PointerButton {
                    button: MouseButton::Left,
                    state: MouseButtonState::Released,
                }),
                Step::Type(text) => self.ui.handle_event(InputEvent::Text(text.to_owned())),
                Step::Key(key) => self.ui.handle_event(InputEvent::Key { key, state: KeyState::Pressed, repeat: false }),
                Step::Idle(n) => {
                    for _ in 0..n {
                        self.frame();
                    }
                    continue;
                }
            }
            self.frame();
        }
    }

    fn frame(&mut self) -> DrawData {
        let out = self.ui.frame_with_dt(DT, VIEWPORT);
        self.frames += 1;
        for ev in &out.events {
            log::info!("frame {:>3}: {ev:?}", self.frames);
        }
        out.draw
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut ui = Ui::new().with_clipboard(Box::new(MemoryClipboard::with_text(" the Bold")));
    ui.load_font("Default", Rc::new(FixedAdvanceFont::new(8.0, 16.0)));

    // ── options panel ─────────────────────────────────────────────────────

    let options = ui.new_container("options", "20px", "20px", "300px", "220px");
    ui.container_mut(options).context("options panel vanished")?.auto_adjust_height = true;

    let launches = Rc::new(Cell::new(0u32));
    let counter = launches.clone();

    ui.add(options, Text::new("Player"))?;
    ui.add(options, Row::new())?;
    let name = ui.add(options, Input::new("Ada").on_submit(|n| log::info!("name set to '{n}'")))?;
    ui.add(options, Text::new("Vsync"))?;
    let vsync = ui.add(options, Checkbox::new(true))?;
    ui.add(options, Row::new())?;
    let loading = ui.add(options, ProgressBar::new(0.0, 0.0, 100.0).on_complete(|| log::info!("assets loaded")))?;
    ui.add(
        options,
        Button::new("Launch").size("120px", "32px").on_click(move || counter.set(counter.get() + 1)),
    )?;

    // ── inventory board ───────────────────────────────────────────────────

    let board = ui.new_container("inventory", "340px", "20px", "260px", "120px");
    let bag = ui.new_dad_group(board, "bag")?;
    let slots = ["30px", "90px", "150px", "210px"]
        .iter()
        .map(|x| ui.add_slot(bag, DadSlot::new(*x, "50px", "48px", "48px")))
        .collect::<Result<Vec<_>, _>>()?;
    let locked = ui.add_slot(
        bag,
        DadSlot::new("30px", "100px", "48px", "48px").on_place(|_, _, payload| payload != 2),
    )?;
    let sword = ui.add_item(bag, DadItem::new("0", "0", "40px", "40px").name("sword").payload(1))?;
    let shield = ui.add_item(bag, DadItem::new("0", "0", "40px", "40px").name("shield").payload(2))?;
    ui.place(slots[0], sword)?;
    ui.place(slots[1], shield)?;

    let mut demo = Demo { ui, frames: 0 };
    let first = demo.frame();
    log::info!("first frame: {} batches, {} faces", first.batches.len(), first.faces());

    // Anchor points, in window space, of what the script interacts with.
    let at = |demo: &Demo, id: WidgetId| -> Result<Vec2> {
        let w = demo.ui.widget(id).with_context(|| format!("widget {id:?} is gone"))?;
        Ok(w.layout.background_rect().center())
    };

    // Rename the player: focus, move to the end, type, submit.
    let field = at(&demo, name)?;
    demo.run(&[
        Step::MoveTo(field.x, field.y),
        Step::Press,
        Step::Release,
        Step::Key(Key::End),
        Step::Type(" Lovelace"),
        Step::Key(Key::Enter),
    ]);

    // Flip vsync off and press launch twice.
    let check = at(&demo, vsync)?;
    demo.run(&[Step::MoveTo(check.x, check.y), Step::Press, Step::Release, Step::Idle(1)]);
    let launch = demo
        .ui
        .containers()
        .find(|(id, _)| *id == options)
        .and_then(|(_, c)| c.widgets().last().copied())
        .context("launch button missing")?;
    let btn = at(&demo, launch)?;
    demo.run(&[Step::MoveTo(btn.x, btn.y), Step::Press, Step::Release, Step::Idle(40), Step::Press, Step::Release]);

    // Drag the sword onto the third slot, then try to lock the shield away.
    let from = at(&demo, sword)?;
    let to = at(&demo, slots[2])?;
    demo.run(&[Step::MoveTo(from.x, from.y), Step::Press, Step::MoveTo(to.x, to.y), Step::Idle(2), Step::Release]);
    let from = at(&demo, shield)?;
    let to = at(&demo, locked)?;
    demo.run(&[Step::MoveTo(from.x, from.y), Step::Press, Step::MoveTo(to.x, to.y), Step::Idle(2), Step::Release]);

    // Fill the loading bar.
    for v in [25.0, 60.0, 100.0] {
        demo.ui.set_progress(loading, v)?;
        demo.frame();
    }
    demo.ui.set_progress(loading, 0.0)?;

    let ui = &demo.ui;
    log::info!("player: '{}'", ui.widget(name).map(|w| w.text.as_str()).unwrap_or_default());
    log::info!("vsync: {:?}, launches: {}", ui.is_checked(vsync), launches.get());
    for (i, &slot) in slots.iter().chain([&locked]).enumerate() {
        let held = ui.slot_item(slot).and_then(|item| ui.widget(item)).map(|w| w.name.as_str());
        log::info!("slot {i}: {}", held.unwrap_or("empty"));
    }
    log::info!("{} frames", demo.frames);
    Ok(())
}
