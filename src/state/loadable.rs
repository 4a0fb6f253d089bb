/// Resultado tipado de una tarea de inicialización
#[derive(Clone, PartialEq, Debug)]
pub enum Loadable<T> {
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Pending
    }
}

impl<T> Loadable<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(e) => Loadable::Failed(e.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Loadable::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Loadable::Ready(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Loadable::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_result_keeps_error_text() {
        let ok: Loadable<u8> = Loadable::from_result(Ok::<u8, String>(3));
        assert_eq!(ok.ready(), Some(&3));

        let failed: Loadable<u8> = Loadable::from_result(Err::<u8, _>("HTTP 500: Internal Server Error"));
        assert_eq!(failed.failure(), Some("HTTP 500: Internal Server Error"));
        assert!(!failed.is_ready());
        assert!(Loadable::<u8>::default().is_pending());
    }
}
