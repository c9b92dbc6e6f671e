/**
  * Try to get the content of an io result, returning an io error with context if there was one.
  * If an error occurs, it is logged and returned as result of the calling function.
  *
  * Params:
  *   $res: std::io::Result<T>
  *   $context: String or &str
  *
  * Returns: T or Err(Error::Io)
  */
#[macro_export]
macro_rules! try_io {
    ($res:expr, $context:expr) => {
        match $res {
            Ok(val) => val,
            Err(orig) => {
                let context = String::from($context);
                error!("{} ({})", context, orig);
                return Err($crate::util::error::Error::Io { context, source: orig });
            }
        }
    }
}

/**
  * Try to get the content of a result, turning any error into a configuration error.
  * If an error occurs, it is logged and returned as result of the calling function.
  *
  * Params:
  *   $res: Result<T,E> where E: Display
  *   $err: String or &str
  *
  * Returns: T or Err(Error::Config)
  */
#[macro_export]
macro_rules! try_config {
    ($res:expr, $err:expr) => {
        match $res {
            Ok(val) => val,
            Err(orig) => {
                let msg = format!("{} ({})", $err, orig);
                error!("{}", msg);
                return Err($crate::util::error::Error::Config(msg));
            }
        }
    }
}

/**
  * Try to get the content of an option, returning a configuration error if there is no content
  *
  * Params:
  *   $opt: Option<T>
  *   $err: String or &str
  *
  * Returns: T or Err(Error::Config)
  */
#[macro_export]
macro_rules! try_option {
    ($opt:expr, $err:expr) => {
        match $opt {
            Some(val) => val,
            None => {
                let msg = String::from($err);
                error!("{}", msg);
                return Err($crate::util::error::Error::Config(msg));
            }
        }
    }
}

#[macro_export]
macro_rules! dry_run {
    ($output:expr) => {
        info!("DRY-RUN: {}", $output);
    }
}
