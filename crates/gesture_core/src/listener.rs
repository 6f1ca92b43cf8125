use shared::domain::ReactorEvent;
use tokio::sync::mpsc;

/// Receives the three reactor notifications. Calls are fire-and-forget.
pub trait ReactorListener: Send + 'static {
    fn did_start(&mut self);
    fn did_tick(&mut self, count: u8);
    fn did_complete(&mut self);
}

pub fn dispatch<L: ReactorListener + ?Sized>(listener: &mut L, event: ReactorEvent) {
    match event {
        ReactorEvent::Start => listener.did_start(),
        ReactorEvent::Tick { count } => listener.did_tick(count),
        ReactorEvent::Complete => listener.did_complete(),
    }
}

impl ReactorListener for mpsc::UnboundedSender<ReactorEvent> {
    fn did_start(&mut self) {
        let _ = self.send(ReactorEvent::Start);
    }

    fn did_tick(&mut self, count: u8) {
        let _ = self.send(ReactorEvent::Tick { count });
    }

    fn did_complete(&mut self) {
        let _ = self.send(ReactorEvent::Complete);
    }
}

impl<L: ReactorListener + ?Sized> ReactorListener for Box<L> {
    fn did_start(&mut self) {
        (**self).did_start();
    }

    fn did_tick(&mut self, count: u8) {
        (**self).did_tick(count);
    }

    fn did_complete(&mut self) {
        (**self).did_complete();
    }
}
