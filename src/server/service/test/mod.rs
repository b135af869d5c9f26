mod bot_gateway;
