use data::config::state::WindowSpec;
use iced::{Point, Size, Subscription, Task, window};

pub use iced::window::{Id, Position, Settings, open};

#[derive(Debug, Clone, Copy)]
pub enum Event {
    CloseRequested(window::Id),
}

pub fn events() -> Subscription<Event> {
    iced::event::listen_with(filtered_events)
}

fn filtered_events(
    event: iced::Event,
    _status: iced::event::Status,
    window: window::Id,
) -> Option<Event> {
    match &event {
        iced::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Event::CloseRequested(window))
        }
        _ => None,
    }
}

/// Opening position and size for the main window, from the saved spec when
/// there is one.
pub fn position_and_size(saved: Option<WindowSpec>) -> (Position, Size) {
    let position = saved
        .map(|spec| spec.position())
        .map_or(Position::Centered, Position::Specific);
    let size = saved.map_or_else(|| WindowSpec::default().size(), |spec| spec.size());

    (position, size)
}

/// Query the window's position and size so they can be persisted on exit.
pub fn collect_spec<M, F>(window_id: window::Id, message: F) -> Task<M>
where
    F: Fn(Option<WindowSpec>) -> M + Send + 'static,
    M: Send + 'static,
{
    let pos_task: Task<(Option<Point>, Option<Size>)> =
        iced::window::position(window_id).map(|pos| (pos, None));
    let size_task: Task<(Option<Point>, Option<Size>)> =
        iced::window::size(window_id).map(|size| (None, Some(size)));

    Task::batch(vec![pos_task, size_task])
        .collect()
        .map(move |results| {
            let position = results.iter().find_map(|(pos, _)| *pos);
            let size = results.iter().find_map(|(_, size)| *size);

            let spec = size.map(|size| {
                let position = position.unwrap_or(Point::ORIGIN);
                WindowSpec {
                    width: size.width,
                    height: size.height,
                    pos_x: position.x,
                    pos_y: position.y,
                }
            });

            message(spec)
        })
}

pub fn settings() -> Settings {
    Settings {
        min_size: Some(Size::new(640.0, 480.0)),
        ..Default::default()
    }
}
